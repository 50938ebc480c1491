//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état du tuteur (onglet courant, saisie, résultats,
//! erreur, carte de quiz, score) et offrir des opérations simples,
//! déterministes, sans effet de bord caché.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de lecture d'angle) :
//!   la vue appelle le noyau puis DÉPOSE les résultats ici.
//! - Le score ne bouge que via noter_reponse().

use crate::noyau::quiz::{Carte, Rng};
use crate::noyau::TrigFn;

/// Les deux outils du tuteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Calculatrice,
    Quiz,
}

#[derive(Clone, Debug)]
pub struct AppTuteur {
    pub onglet: Onglet,

    // --- calculatrice ---
    pub fonction: TrigFn,
    pub entree: String,
    pub resultat: String, // "cos(2π/3) = -1/2" ou "… = 0.841 (approx.)"
    pub erreur: String,   // message si la lecture de l'angle échoue

    // --- quiz ---
    pub rng: Option<Rng>,    // graine posée au premier tirage
    pub carte: Option<Carte>,
    pub verdict: String, // vide tant que la carte n'a pas été jouée
    pub bonnes: u32,
    pub total: u32,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à la saisie après un clic.
    pub focus_entree: bool,
}

impl Default for AppTuteur {
    fn default() -> Self {
        Self {
            onglet: Onglet::Calculatrice,
            fonction: TrigFn::Sin,
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            rng: None,
            carte: None,
            verdict: String::new(),
            bonnes: 0,
            total: 0,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppTuteur {
    /* ------------------------ Calculatrice ------------------------ */

    /// C : effacer seulement la saisie (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// AC : remise à zéro de l'onglet calculatrice.
    pub fn reset_calculatrice(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Déposer une erreur de lecture.
    /// On CONSERVE le dernier résultat : une faute de frappe ne doit pas
    /// effacer l'écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Déposer un résultat (et lever l'erreur précédente).
    pub fn set_resultat(&mut self, texte: impl Into<String>) {
        self.resultat = texte.into();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /* ------------------------ Quiz ------------------------ */

    /// Déposer une nouvelle carte : le verdict repart à vide.
    pub fn deposer_carte(&mut self, carte: Carte) {
        self.carte = Some(carte);
        self.verdict.clear();
    }

    /// La carte courante attend-elle encore une réponse ?
    pub fn carte_en_jeu(&self) -> bool {
        self.carte.is_some() && self.verdict.is_empty()
    }

    /// Noter la réponse jouée : incrémente le score UNE seule fois par
    /// carte (ignorée si la carte est déjà jouée).
    pub fn noter_reponse(&mut self, correcte: bool, verdict: impl Into<String>) {
        if !self.carte_en_jeu() {
            return;
        }

        self.total += 1;
        if correcte {
            self.bonnes += 1;
        }
        self.verdict = verdict.into();
    }

    /// Score courant, dans la formulation du quiz.
    pub fn score_texte(&self) -> String {
        format!("Score : {} sur {}", self.bonnes, self.total)
    }

    /// Remise à zéro du quiz (score + carte), le RNG est conservé.
    pub fn reset_quiz(&mut self) {
        self.carte = None;
        self.verdict.clear();
        self.bonnes = 0;
        self.total = 0;
    }
}
