// src/noyau/angle.rs
//
// Lecture d'un angle en radians depuis une saisie libre.
// - "π" ou "pi" (toute casse) -> constante π
// - multiplication implicite chiffre·π : "2π" lu comme "2*π"
// - fractions simples : "3π/4", "2pi/3"
// - décimaux signés : "-3.7"
//
// Volontairement limité : UN seul opérateur par sous-expression
// (un '*' ou un '/', jamais les deux combinés librement).
// Le rapprochement par tolérance en aval suppose des multiples
// rationnels simples de π ; ne pas étendre cette grammaire.

use std::f64::consts::PI;

/// Jeton interne pour π après normalisation.
/// Caractère hors alphabet d'entrée (rejeté en amont s'il est saisi tel quel).
const JETON_PI: char = '#';

/// Lit une saisie d'angle (déjà débarrassée des espaces par l'appelant)
/// et retourne sa valeur en radians.
///
/// Erreurs (jamais de sentinelle numérique) :
/// - entrée vide
/// - caractère hors alphabet (chiffres, '.', '-', '*', '/', π/pi)
/// - fraction à plus d'une barre ("pi//2")
/// - littéral illisible ("abc", "pi2")
pub fn parse_angle(brut: &str) -> Result<f64, String> {
    if brut.is_empty() {
        return Err("entrée vide".into());
    }

    // 1) normalisation : tout en minuscules, glyphe π -> "pi"
    let s = brut.to_lowercase().replace('π', "pi");

    // 2) alphabet strict (refuse aussi le jeton interne)
    for c in s.chars() {
        let ok = c.is_ascii_digit() || matches!(c, '.' | '-' | '*' | '/' | 'p' | 'i');
        if !ok {
            return Err(format!("caractère inattendu: '{c}'"));
        }
    }

    // 3) "pi" -> jeton π, puis '*' implicite entre un chiffre et π
    let s = s.replace("pi", &JETON_PI.to_string());
    let norm = insere_mult_implicite(&s);

    // 4) fraction ? exactement deux parts, sinon erreur
    if norm.contains('/') {
        let parts: Vec<&str> = norm.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("fraction invalide: {brut:?}"));
        }

        let numerateur = eval_partie(parts[0])?;
        let denominateur = eval_partie(parts[1])?;
        if denominateur == 0.0 {
            return Err("division par zéro".into());
        }

        return Ok(numerateur / denominateur);
    }

    eval_partie(&norm)
}

/// Insère '*' entre un chiffre et le jeton π qui le suit immédiatement.
/// C'est la SEULE réécriture implicite : aucun autre voisinage n'est touché.
fn insere_mult_implicite(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut precedent: Option<char> = None;

    for c in s.chars() {
        if c == JETON_PI {
            if let Some(p) = precedent {
                if p.is_ascii_digit() {
                    out.push('*');
                }
            }
        }
        out.push(c);
        precedent = Some(c);
    }

    out
}

/// Réduit une part sans barre de fraction en nombre :
/// un '*' au plus (deux facteurs), sinon littéral direct.
fn eval_partie(expr: &str) -> Result<f64, String> {
    if expr.contains('*') {
        let facteurs: Vec<&str> = expr.split('*').collect();
        if facteurs.len() != 2 {
            return Err(format!("produit invalide: {expr:?}"));
        }
        return Ok(nombre(facteurs[0])? * nombre(facteurs[1])?);
    }

    nombre(expr)
}

/// Littéral terminal : jeton π (signé ou non) ou flottant décimal.
/// Les flottants passent par le parseur natif, qui gère lui-même le
/// signe (et refuse "--5", "-", etc.).
fn nombre(txt: &str) -> Result<f64, String> {
    if txt.chars().eq([JETON_PI]) {
        return Ok(PI);
    }
    if txt.chars().eq(['-', JETON_PI]) {
        return Ok(-PI);
    }

    txt.parse::<f64>()
        .map_err(|_| format!("nombre invalide: {txt:?}"))
}
