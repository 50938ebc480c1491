// src/noyau/quiz.rs
//
// Quiz du cercle trigonométrique (cartes mémoire).
// Tirage d'une fonction × un angle canonique, réponse à choisir parmi
// quatorze propositions fixes : colonnes 1..=7 de la ligne cosinus puis
// de la ligne tangente. Ces deux lignes couvrent toutes les valeurs
// atteignables (signes compris, "indéfini" inclus).
//
// Aucune entrée/sortie ici : le RNG est injecté, le score vit dans l'UI.

use std::fmt;

use super::resolution::TrigFn;
use super::table::table_canonique;

/// Nombre de propositions affichées au quiz.
pub const NB_CHOIX: usize = 14;

/* ------------------------ RNG déterministe minimal ------------------------ */

/// LCG simple : déterministe sous graine fixe, suffisant pour tirer des
/// cartes (aucun besoin cryptographique).
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Carte mémoire ------------------------ */

/// Une carte : « que vaut sin(π/4) ? » avec sa bonne réponse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carte {
    pub fonction: TrigFn,
    pub etiquette: &'static str,
    pub valeur: &'static str,
}

impl Carte {
    /// La réponse est correcte si elle est EXACTEMENT la valeur de la
    /// carte (texte signé ; "indéfini" se compare comme tout autre texte).
    pub fn verifier(&self, reponse: &str) -> bool {
        self.valeur == reponse
    }
}

impl fmt::Display for Carte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = {}", self.fonction.nom(), self.etiquette, self.valeur)
    }
}

/// Tire une carte : fonction au hasard × angle canonique au hasard,
/// valeur lue directement dans la table (signe déjà porté par la case).
pub fn carte_aleatoire(rng: &mut Rng) -> Carte {
    let fonction = match rng.pick(3) {
        0 => TrigFn::Sin,
        1 => TrigFn::Cos,
        _ => TrigFn::Tan,
    };

    let table = table_canonique();
    let entree = &table[rng.pick(table.len() as u32) as usize];

    let valeur = match fonction {
        TrigFn::Sin => entree.sin,
        TrigFn::Cos => entree.cos,
        TrigFn::Tan => entree.tan,
    };

    Carte {
        fonction,
        etiquette: entree.etiquette,
        valeur: valeur.texte(),
    }
}

/// Les quatorze propositions, dans un ordre fixe :
/// cos(π/6)…cos(3π/4+…): colonnes 1..=7 de la ligne cosinus,
/// puis colonnes 1..=7 de la ligne tangente.
pub fn choix_reponses() -> [&'static str; NB_CHOIX] {
    let table = table_canonique();

    core::array::from_fn(|i| {
        let entree = &table[1 + (i % 7)];
        if i < 7 {
            entree.cos.texte()
        } else {
            entree.tan.texte()
        }
    })
}
