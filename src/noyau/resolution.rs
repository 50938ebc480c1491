// src/noyau/resolution.rs
//
// Résolution exacte d'une fonction trig en un angle quelconque.
// Pipeline : réduction [0, 2π) -> angle de référence [0, π/2]
//         -> rapprochement table (tolérance) -> signe par quadrant.
// Si l'angle n'est pas canonique, repli décimal sur l'angle ORIGINAL
// (non réduit), comme une calculatrice ordinaire.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use super::angle::parse_angle;
use super::table::{table_canonique, EntreeCanonique, ValeurExacte};

/// Tolérance absolue du rapprochement table (en radians).
/// Absorbe la propagation d'arrondis de π tout en restant très
/// en dessous de l'écart minimal entre deux angles canoniques (π/12).
pub const TOLERANCE_TABLE: f64 = 0.01;

/// Fonction trigonométrique sélectionnée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }

    /// Évaluation décimale native (repli hors table).
    fn approx(self, radians: f64) -> f64 {
        match self {
            TrigFn::Sin => radians.sin(),
            TrigFn::Cos => radians.cos(),
            TrigFn::Tan => radians.tan(),
        }
    }

    /// Case de la table correspondant à cette fonction.
    fn valeur_dans(self, entree: &EntreeCanonique) -> ValeurExacte {
        match self {
            TrigFn::Sin => entree.sin,
            TrigFn::Cos => entree.cos,
            TrigFn::Tan => entree.tan,
        }
    }
}

/// Issue d'une résolution : valeur exacte signée, sentinelle indéfinie,
/// ou approximation décimale.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultatTrig {
    Exact(String),
    Indefini,
    Approche(f64),
}

impl fmt::Display for ResultatTrig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultatTrig::Exact(s) => write!(f, "{s}"),
            ResultatTrig::Indefini => write!(f, "indéfini"),
            ResultatTrig::Approche(v) => write!(f, "{v:.3} (approx.)"),
        }
    }
}

/// Ramène un angle quelconque dans [0, 2π).
pub fn reduire_2pi(radians: f64) -> f64 {
    let mut r = radians % TAU;
    if r < 0.0 {
        r += TAU;
        // un reste négatif sous l'ulp de 2π remonte exactement à 2π
        // par arrondi : la borne supérieure doit rester exclue
        if r >= TAU {
            r = 0.0;
        }
    }
    r
}

/// Angle de référence dans [0, π/2], selon le quadrant de `rad`
/// (qui doit déjà être dans [0, 2π)).
pub fn angle_reference(rad: f64) -> f64 {
    if rad <= FRAC_PI_2 {
        rad // quadrant I
    } else if rad <= PI {
        PI - rad // quadrant II
    } else if rad <= 3.0 * FRAC_PI_2 {
        rad - PI // quadrant III
    } else {
        TAU - rad // quadrant IV
    }
}

/// Le signe dépend du quadrant de l'angle RÉDUIT `rad`, pas de l'angle
/// de référence (qui a perdu cette information).
fn signe_negatif(f: TrigFn, rad: f64) -> bool {
    match f {
        // sin < 0 en quadrants III et IV
        TrigFn::Sin => rad >= PI && rad < TAU,
        // cos < 0 en quadrants II et III
        TrigFn::Cos => rad >= FRAC_PI_2 && rad < 3.0 * FRAC_PI_2,
        // tan < 0 en quadrants II et IV (bornes exclues : indéfini / zéro)
        TrigFn::Tan => {
            (rad > FRAC_PI_2 && rad < PI) || (rad > 3.0 * FRAC_PI_2 && rad < TAU)
        }
    }
}

/// Préfixe "-" si le quadrant l'exige. Jamais sur "0" : "-0" n'a pas
/// de sens pour une valeur exacte.
fn applique_signe(f: TrigFn, rad: f64, valeur: &str) -> String {
    if signe_negatif(f, rad) && valeur != "0" {
        format!("-{valeur}")
    } else {
        valeur.to_string()
    }
}

/// Résout `f` en `radians` : valeur exacte si l'angle de référence
/// tombe (à la tolérance près) sur une ligne canonique, sinon repli
/// décimal sur l'angle original non réduit.
pub fn resoudre(f: TrigFn, radians: f64) -> ResultatTrig {
    let rad = reduire_2pi(radians);
    let reference = angle_reference(rad);

    for entree in table_canonique() {
        if (entree.radians - reference).abs() < TOLERANCE_TABLE {
            return match f.valeur_dans(entree) {
                ValeurExacte::Indefini => ResultatTrig::Indefini,
                ValeurExacte::Symbole(s) => {
                    ResultatTrig::Exact(applique_signe(f, rad, s))
                }
            };
        }
    }

    ResultatTrig::Approche(f.approx(radians))
}

/// Point d'entrée de l'UI : retire les espaces, lit l'angle, résout.
/// Les erreurs de lecture remontent telles quelles ; la relance de la
/// saisie appartient à l'appelant.
pub fn evaluer(f: TrigFn, brut: &str) -> Result<ResultatTrig, String> {
    let sans_espaces: String = brut.chars().filter(|c| !c.is_whitespace()).collect();
    if sans_espaces.is_empty() {
        return Err("entrée vide".into());
    }

    let radians = parse_angle(&sans_espaces)?;
    Ok(resoudre(f, radians))
}
