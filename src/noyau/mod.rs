//! Noyau Tuteur Trigo
//!
//! Organisation interne :
//! - angle.rs      : lecture d'angle ("3π/4", "2pi/3", "-3.7") -> radians
//! - table.rs      : table canonique (9 angles, valeurs exactes)
//! - resolution.rs : réduction quadrant + rapprochement + signe + repli
//! - quiz.rs       : cartes mémoire du cercle trigonométrique
//!
//! Le noyau est pur : aucune entrée/sortie, aucun état mutable partagé
//! entre deux requêtes. La table canonique est construite une fois puis
//! lue seulement.

pub mod angle;
pub mod quiz;
pub mod resolution;
pub mod table;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use angle::parse_angle;
pub use resolution::{evaluer, resoudre, ResultatTrig, TrigFn};
