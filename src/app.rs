// src/app.rs
//
// Tuteur Trigo — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppTuteur (pour main.rs: use crate::app::AppTuteur;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le
//   champ a le focus).
// - Ici, on évite d'appeler des méthodes privées de vue.rs.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppTuteur;`
pub use etat::AppTuteur;

use eframe::egui;

impl eframe::App for AppTuteur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer seulement la saisie (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
