// src/noyau/table.rs
//
// Table canonique du cercle trigonométrique.
// Neuf angles entre 0 et π (inclus), radians strictement croissants.
// Les radians sont DÉRIVÉS des étiquettes via parse_angle : la table et
// la saisie utilisateur passent par la même lecture, donc se rapprochent
// avec les mêmes arrondis.
//
// La réduction par quadrant ramène toujours l'angle de référence dans
// [0, π/2] : seules les cinq premières lignes servent au rapprochement.
// Les quatre dernières (2π/3 … π) alimentent le quiz (valeurs signées).

use std::sync::OnceLock;

use super::angle::parse_angle;

/// Valeur trigonométrique exacte d'une case de la table.
/// `Indefini` est une sentinelle explicite (tan en π/2), jamais un
/// débordement flottant ni un NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValeurExacte {
    Symbole(&'static str),
    Indefini,
}

impl ValeurExacte {
    /// Texte affichable de la case.
    pub fn texte(self) -> &'static str {
        match self {
            ValeurExacte::Symbole(s) => s,
            ValeurExacte::Indefini => "indéfini",
        }
    }
}

/// Une ligne de la table : étiquette d'affichage, valeur numérique,
/// et les trois valeurs exactes.
#[derive(Clone, Copy, Debug)]
pub struct EntreeCanonique {
    pub etiquette: &'static str,
    pub radians: f64,
    pub sin: ValeurExacte,
    pub cos: ValeurExacte,
    pub tan: ValeurExacte,
}

/// Étiquettes des neuf angles canoniques, ordre croissant.
pub const ETIQUETTES: [&str; 9] = [
    "0", "π/6", "π/4", "π/3", "π/2", "2π/3", "3π/4", "5π/6", "π",
];

use ValeurExacte::{Indefini, Symbole};

const LIGNE_SIN: [ValeurExacte; 9] = [
    Symbole("0"),
    Symbole("1/2"),
    Symbole("√2/2"),
    Symbole("√3/2"),
    Symbole("1"),
    Symbole("√3/2"),
    Symbole("√2/2"),
    Symbole("1/2"),
    Symbole("0"),
];

const LIGNE_COS: [ValeurExacte; 9] = [
    Symbole("1"),
    Symbole("√3/2"),
    Symbole("√2/2"),
    Symbole("1/2"),
    Symbole("0"),
    Symbole("-1/2"),
    Symbole("-√2/2"),
    Symbole("-√3/2"),
    Symbole("-1"),
];

const LIGNE_TAN: [ValeurExacte; 9] = [
    Symbole("0"),
    Symbole("√3/3"),
    Symbole("1"),
    Symbole("√3"),
    Indefini,
    Symbole("-√3"),
    Symbole("-1"),
    Symbole("-√3/3"),
    Symbole("0"),
];

static TABLE: OnceLock<[EntreeCanonique; 9]> = OnceLock::new();

/// Table canonique, construite une fois au premier accès puis figée.
/// Lecture seule pour tout le processus : partageable sans verrou.
pub fn table_canonique() -> &'static [EntreeCanonique; 9] {
    TABLE.get_or_init(construire)
}

fn construire() -> [EntreeCanonique; 9] {
    core::array::from_fn(|i| {
        let etiquette = ETIQUETTES[i];
        let radians = parse_angle(etiquette)
            .unwrap_or_else(|e| panic!("étiquette canonique illisible {etiquette:?}: {e}"));

        EntreeCanonique {
            etiquette,
            radians,
            sin: LIGNE_SIN[i],
            cos: LIGNE_COS[i],
            tan: LIGNE_TAN[i],
        }
    })
}
