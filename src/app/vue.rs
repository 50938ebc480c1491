// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux onglets : Calculatrice (valeur exacte ou décimale) et Quiz
// (cartes mémoire du cercle trigonométrique).
//
// La vue est la SEULE couche qui appelle le noyau. Les erreurs de
// lecture sont reposées dans l'état et affichées sur place : la
// "relance" de la saisie, c'est simplement rester dans le champ.

use eframe::egui;

use super::etat::{AppTuteur, Onglet};
use crate::noyau::quiz::{carte_aleatoire, choix_reponses, Rng};
use crate::noyau::{evaluer, TrigFn};

impl AppTuteur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Tuteur Trigo");
                ui.add_space(6.0);

                // Sélecteur d'outil
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calculatrice");
                    ui.selectable_value(&mut self.onglet, Onglet::Quiz, "Quiz du cercle");
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                match self.onglet {
                    Onglet::Calculatrice => self.ui_calculatrice(ui),
                    Onglet::Quiz => self.ui_quiz(ui),
                }
            });
    }

    /* ------------------------ Onglet calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        // Choix de la fonction
        ui.horizontal(|ui| {
            ui.label("Fonction :");
            for f in [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan] {
                ui.selectable_value(&mut self.fonction, f, f.nom());
            }
        });

        ui.add_space(6.0);
        ui.label("Angle en radians :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: -3.7, pi/2, 15π/4")
                .id_source("entree_angle")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus) : pas de
        // déclenchement global quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Touches rapides + actions
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "π", "π");
            self.bouton_insert(ui, "pi", "pi");
            self.bouton_insert(ui, "/", "/");
            self.bouton_insert(ui, "-", "-");
            self.bouton_insert(ui, ".", ".");

            ui.separator();

            let del = ui
                .add_sized([56.0, 30.0], egui::Button::new("DEL"))
                .on_hover_text("Efface le dernier symbole");
            if del.clicked() {
                self.backspace_entree();
                self.focus_entree = true;
            }

            let c = ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement la saisie");
            if c.clicked() {
                self.clear_entree();
            }

            let ac = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro de la calculatrice");
            if ac.clicked() {
                self.reset_calculatrice();
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Évalue la saisie via le noyau, puis dépose résultat ou erreur.
    fn eval_via_noyau(&mut self) {
        let brut = self.entree.clone();

        match evaluer(self.fonction, &brut) {
            Ok(resultat) => {
                let affiche = brut.trim();
                self.set_resultat(format!(
                    "{}({affiche}) = {resultat}",
                    self.fonction.nom()
                ));
            }
            Err(msg) => self.set_erreur(msg),
        }
    }

    /// Backspace "intelligent" : retire d'un coup les motifs utiles.
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        if self.entree.ends_with("pi") {
            self.entree.pop();
            self.entree.pop();
            return;
        }

        self.entree.pop();
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Onglet quiz ------------------------ */

    fn ui_quiz(&mut self, ui: &mut egui::Ui) {
        ui.label("Mémorise ton cercle trigonométrique !");
        ui.add_space(6.0);

        let enonce = self
            .carte
            .as_ref()
            .map(|c| format!("Que vaut {}({}) ?", c.fonction.nom(), c.etiquette));

        match enonce {
            None => {
                if ui
                    .add_sized([160.0, 32.0], egui::Button::new("Tirer une carte"))
                    .clicked()
                {
                    self.tirer_carte(ui);
                }
            }
            Some(enonce) => {
                ui.heading(enonce);
                ui.add_space(8.0);

                self.ui_choix(ui);

                if !self.verdict.is_empty() {
                    ui.add_space(8.0);
                    ui.monospace(&self.verdict);
                    ui.add_space(6.0);

                    if ui
                        .add_sized([160.0, 32.0], egui::Button::new("Carte suivante"))
                        .clicked()
                    {
                        self.tirer_carte(ui);
                    }
                }
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(self.score_texte());

        if ui.small_button("Remettre le score à zéro").clicked() {
            self.reset_quiz();
        }
    }

    /// Les 14 propositions, deux rangées de sept.
    fn ui_choix(&mut self, ui: &mut egui::Ui) {
        let choix = choix_reponses();
        let en_jeu = self.carte_en_jeu();
        let mut joue: Option<&'static str> = None;

        egui::Grid::new("grille_choix_quiz")
            .num_columns(7)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, valeur) in choix.iter().enumerate() {
                    let bouton =
                        ui.add_enabled(en_jeu, egui::Button::new(*valeur).min_size([64.0, 30.0].into()));
                    if bouton.clicked() {
                        joue = Some(valeur);
                    }
                    if i % 7 == 6 {
                        ui.end_row();
                    }
                }
            });

        if let Some(valeur) = joue {
            self.jouer(valeur);
        }
    }

    /// Vérifie la réponse via la carte et note le score.
    fn jouer(&mut self, reponse: &str) {
        let Some(carte) = self.carte.clone() else {
            return;
        };

        let correcte = carte.verifier(reponse);
        let verdict = if correcte {
            format!("✨ Correct ! {carte}")
        } else {
            format!("👎 Raté. {carte}")
        };

        self.noter_reponse(correcte, verdict);
    }

    /// Tire une carte via le noyau. La graine vient de l'horloge egui
    /// (disponible en natif comme en wasm).
    fn tirer_carte(&mut self, ui: &egui::Ui) {
        let graine = ui.input(|i| i.time).to_bits();
        let rng = self.rng.get_or_insert_with(|| Rng::new(graine | 1));

        let carte = carte_aleatoire(rng);
        self.deposer_carte(carte);
    }
}
