//! Tests scientifiques (campagne) : invariants du pipeline complet.
//!
//! Propriétés visées :
//! - aller-retour : chaque étiquette canonique relue = radians stockés
//! - périodicité : resoudre(f, r) == resoudre(f, r + 2πk)
//! - angle de référence toujours dans [0, π/2]
//! - table de signes littérale (quadrants II, III, IV)
//! - repli décimal sur l'angle original, jamais sur l'angle réduit
//! - quiz : toute carte tirable trouve sa valeur parmi les choix
//!
//! Budget temps global pour que la campagne reste courte.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::time::{Duration, Instant};

use super::angle::parse_angle;
use super::quiz::{carte_aleatoire, choix_reponses, Rng};
use super::resolution::{angle_reference, reduire_2pi, resoudre, ResultatTrig, TrigFn};
use super::table::{table_canonique, ETIQUETTES};

const FONCTIONS: [TrigFn; 3] = [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan];

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Aller-retour table <-> lecture ------------------------ */

#[test]
fn sci_etiquettes_relues_au_nanoradian() {
    for (i, etiquette) in ETIQUETTES.iter().enumerate() {
        let relu = parse_angle(etiquette)
            .unwrap_or_else(|e| panic!("étiquette {etiquette:?}: {e}"));
        let stocke = table_canonique()[i].radians;
        assert!(
            (relu - stocke).abs() < 1e-9,
            "aller-retour raté pour {etiquette:?}: {relu} vs {stocke}"
        );
    }
}

/* ------------------------ Périodicité ------------------------ */

#[test]
fn sci_periodicite_2pi() {
    let start = Instant::now();

    let bases = [0.0, PI / 6.0, PI / 4.0, 1.0, 2.5, -0.7, 3.0 * FRAC_PI_2];
    for &base in &bases {
        for k in -4i32..=4 {
            let decale = base + f64::from(k) * TAU;
            for &f in &FONCTIONS {
                let attendu = resoudre(f, base);
                let obtenu = resoudre(f, decale);

                // les Approche peuvent différer d'un epsilon (arguments
                // flottants distincts) : on compare avec marge
                match (&attendu, &obtenu) {
                    (ResultatTrig::Approche(x), ResultatTrig::Approche(y)) => {
                        assert!((x - y).abs() < 1e-6, "base={base} k={k}")
                    }
                    _ => assert_eq!(attendu, obtenu, "base={base} k={k}"),
                }
            }
        }
        budget(start, Duration::from_secs(5));
    }
}

/* ------------------------ Référence bornée ------------------------ */

#[test]
fn sci_reference_toujours_dans_0_pi_sur_2() {
    let start = Instant::now();

    // balayage serré sur deux tours complets, des deux côtés
    let mut a = -2.0 * TAU;
    while a <= 2.0 * TAU {
        let rad = reduire_2pi(a);
        assert!((0.0..TAU).contains(&rad), "angle={a}");

        let reference = angle_reference(rad);
        assert!(
            (-1e-12..=FRAC_PI_2 + 1e-12).contains(&reference),
            "référence hors bornes pour angle={a}: {reference}"
        );

        a += 0.0137; // pas irrégulier, évite de ne tester que des multiples ronds
    }

    budget(start, Duration::from_secs(5));
}

/* ------------------------ Table de signes ------------------------ */

#[test]
fn sci_table_de_signes_litterale() {
    let cas: [(TrigFn, f64, &str); 8] = [
        (TrigFn::Cos, 2.0 * PI / 3.0, "-1/2"),
        (TrigFn::Sin, 7.0 * PI / 6.0, "-1/2"),
        (TrigFn::Tan, 3.0 * PI / 4.0, "-1"),
        (TrigFn::Sin, 5.0 * PI / 4.0, "-√2/2"),
        (TrigFn::Cos, 5.0 * PI / 6.0, "-√3/2"),
        (TrigFn::Tan, 5.0 * PI / 3.0, "-√3"),
        (TrigFn::Sin, 11.0 * PI / 6.0, "-1/2"),
        (TrigFn::Cos, 7.0 * PI / 4.0, "√2/2"), // quadrant IV : cos positif
    ];

    for (f, angle, attendu) in cas {
        match resoudre(f, angle) {
            ResultatTrig::Exact(s) => assert_eq!(s, attendu, "{}({angle})", f.nom()),
            autre => panic!("{}({angle}) : attendu Exact, obtenu {autre:?}", f.nom()),
        }
    }
}

#[test]
fn sci_indefinis_tan() {
    for angle in [FRAC_PI_2, 3.0 * FRAC_PI_2, -FRAC_PI_2, FRAC_PI_2 + TAU] {
        assert_eq!(
            resoudre(TrigFn::Tan, angle),
            ResultatTrig::Indefini,
            "tan({angle})"
        );
    }

    // sin et cos restent définis au même angle
    assert_eq!(
        resoudre(TrigFn::Sin, FRAC_PI_2),
        ResultatTrig::Exact("1".into())
    );
    assert_eq!(
        resoudre(TrigFn::Cos, FRAC_PI_2),
        ResultatTrig::Exact("0".into())
    );
}

/* ------------------------ Repli décimal ------------------------ */

#[test]
fn sci_repli_decimal_valeurs_connues() {
    let cas: [(TrigFn, f64, f64); 3] = [
        (TrigFn::Sin, 1.0, 0.841_470_984_8),
        (TrigFn::Cos, 2.0, -0.416_146_836_5),
        (TrigFn::Tan, 1.2, 2.572_151_622_1),
    ];

    for (f, angle, attendu) in cas {
        match resoudre(f, angle) {
            ResultatTrig::Approche(v) => {
                assert!((v - attendu).abs() < 1e-6, "{}({angle})", f.nom())
            }
            autre => panic!("{}({angle}) : attendu Approche, obtenu {autre:?}", f.nom()),
        }
    }
}

#[test]
fn sci_frontiere_tolerance() {
    // à 0.02 rad d'un angle canonique : hors tolérance (0.01) => repli
    let presque = PI / 4.0 + 0.02;
    assert!(matches!(
        resoudre(TrigFn::Sin, presque),
        ResultatTrig::Approche(_)
    ));

    // à 0.005 rad : dans la tolérance => rapproché sur π/4
    let tout_pres = PI / 4.0 + 0.005;
    assert_eq!(
        resoudre(TrigFn::Sin, tout_pres),
        ResultatTrig::Exact("√2/2".into())
    );
}

/* ------------------------ Quiz ------------------------ */

#[test]
fn sci_quiz_cartes_couvertes_par_les_choix() {
    let start = Instant::now();
    let choix = choix_reponses();
    let mut rng = Rng::new(2024);

    for _ in 0..1000 {
        let carte = carte_aleatoire(&mut rng);
        assert!(
            choix.contains(&carte.valeur),
            "carte sans réponse proposée: {carte}"
        );
        assert!(carte.verifier(carte.valeur));
    }

    budget(start, Duration::from_secs(5));
}

/* ------------------------ Cohérence exact / décimal ------------------------ */

#[test]
fn sci_exact_coherent_avec_le_decimal() {
    // chaque valeur exacte rapprochée doit valoir numériquement la
    // fonction native au même angle (à la précision du texte près)
    fn valeur_numerique(s: &str) -> f64 {
        match s {
            "0" => 0.0,
            "1" => 1.0,
            "-1" => -1.0,
            "1/2" => 0.5,
            "-1/2" => -0.5,
            "√2/2" => 2f64.sqrt() / 2.0,
            "-√2/2" => -(2f64.sqrt()) / 2.0,
            "√3/2" => 3f64.sqrt() / 2.0,
            "-√3/2" => -(3f64.sqrt()) / 2.0,
            "√3/3" => 3f64.sqrt() / 3.0,
            "-√3/3" => -(3f64.sqrt()) / 3.0,
            "√3" => 3f64.sqrt(),
            "-√3" => -(3f64.sqrt()),
            autre => panic!("valeur exacte inattendue: {autre:?}"),
        }
    }

    for entree in table_canonique() {
        // tous les quadrants : l'angle lui-même, son symétrique, etc.
        for &angle in &[entree.radians, -entree.radians, entree.radians + PI] {
            for &f in &FONCTIONS {
                if let ResultatTrig::Exact(s) = resoudre(f, angle) {
                    let natif = match f {
                        TrigFn::Sin => angle.sin(),
                        TrigFn::Cos => angle.cos(),
                        TrigFn::Tan => angle.tan(),
                    };
                    assert!(
                        (valeur_numerique(&s) - natif).abs() < 1e-9,
                        "{}({angle}) = {s} mais natif = {natif}",
                        f.nom()
                    );
                }
            }
        }
    }
}
