//! Tests scientifiques (campagne) : scénarios concrets + invariants + limites contrôlées.
//!
//! But : vérifier les derniers chiffres sans faire chauffer la machine.
//! - valeurs attendues arrondies demi-pair à l’échelle de l’instance
//! - budget temps global sur les cas lourds (échelle max)
//! - erreurs attendues vérifiées par variante (Domaine / Division / Configuration)

use std::time::{Duration, Instant};

use super::calcul::{CalculDecimal, ECHELLE_MAX};
use super::constantes;
use super::decimal::Decimal;
use super::erreur::ErreurCalcul;

fn calc(echelle: i64) -> CalculDecimal {
    CalculDecimal::new(echelle).unwrap_or_else(|e| panic!("échelle {echelle}: {e}"))
}

fn d(s: &str) -> Decimal {
    s.parse().unwrap_or_else(|e| panic!("littéral {s:?}: {e}"))
}

fn assert_txt(r: Decimal, attendu: &str) {
    assert_eq!(r.to_string(), attendu);
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios concrets ------------------------ */

#[test]
fn sci_trig_en_zero() {
    let c = calc(10);
    assert_txt(c.cos(&d("0")).unwrap(), "1.0000000000");
    assert_txt(c.sin(&d("0")).unwrap(), "0.0000000000");
    assert_txt(c.tan(&d("0")).unwrap(), "0.0000000000");
}

#[test]
fn sci_log_un_exp_zero() {
    let c = calc(20);
    let l = c.log(&d("1")).unwrap();
    assert_eq!(l, d("0"));
    assert_txt(l, "0.00000000000000000000");
    assert_txt(c.exp(&d("0")).unwrap(), "1.00000000000000000000");
}

#[test]
fn sci_racine_de_deux_demi_pair() {
    // 1.41421356237… : le 11e chiffre (7) fait monter le 10e
    assert_txt(calc(10).sqrt(&d("2")).unwrap(), "1.4142135624");
}

#[test]
fn sci_pow_entier() {
    assert_txt(calc(0).pow(&d("2"), &d("10")).unwrap(), "1024");
}

#[test]
fn sci_valeurs_de_reference_30() {
    let c = calc(30);
    assert_txt(c.exp(&d("1")).unwrap(), "2.718281828459045235360287471353");
    assert_txt(c.log(&d("10")).unwrap(), "2.302585092994045684017991454684");
    assert_txt(c.tan(&d("-1")).unwrap(), "-1.557407724654902230506974807458");
}

#[test]
fn sci_valeurs_de_reference_20() {
    let c = calc(20);
    assert_txt(c.exp(&d("-30")).unwrap(), "0.00000000000009357623");
    assert_txt(c.exp(&d("10")).unwrap(), "22026.46579480671651695790");
    assert_txt(c.cos(&d("-7.5")).unwrap(), "0.34663531783502581097");
    assert_txt(c.sin(&d("-0.5")).unwrap(), "-0.47942553860420300027");
}

/* ------------------------ Invariants trig ------------------------ */

#[test]
fn sci_periodicite() {
    let c = calc(15);
    let deux_pi = constantes::deux_pi();
    for s in ["0.3", "1", "-2.2", "3"] {
        let x = d(s);
        let decale = &x + deux_pi;
        assert_eq!(c.cos(&x).unwrap(), c.cos(&decale).unwrap(), "cos({s})");
        assert_eq!(c.sin(&x).unwrap(), c.sin(&decale).unwrap(), "sin({s})");
    }
}

#[test]
fn sci_symetries() {
    let c = calc(18);
    for s in ["0.25", "1.3", "2.9", "5"] {
        let x = d(s);
        let moins_x = -&x;
        assert_eq!(c.cos(&moins_x).unwrap(), c.cos(&x).unwrap());
        assert_eq!(c.sin(&moins_x).unwrap(), -c.sin(&x).unwrap());
    }
}

#[test]
fn sci_angles_remarquables() {
    let c = calc(25);
    let pi = constantes::pi();
    assert_eq!(c.sin(pi).unwrap(), d("0"));
    assert_eq!(c.cos(pi).unwrap(), d("-1"));
    assert_eq!(c.sin(constantes::demi_pi()).unwrap(), d("1"));
    assert_eq!(c.cos(constantes::demi_pi()).unwrap(), d("0"));
}

#[test]
fn sci_tan_pres_des_poles_reduits() {
    // x au-delà de π : l’argument réduit doit suivre les chiffres de rattrapage
    let c = calc(30);
    assert_txt(
        c.tan(&d("7.8539806")).unwrap(),
        "967141.855382369771251466725151277915",
    );
    assert_txt(
        c.tan(&d("-4.71238")).unwrap(),
        "-111353.804375719218992808761126565245",
    );
    assert_txt(
        c.tan(&d("14.13716")).unwrap(),
        "144068.261554298776126785579132430424",
    );
}

#[test]
fn sci_grands_arguments_trig() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);

    assert_txt(calc(20).sin(&d("1e240")).unwrap(), "0.65764050930921642547");
    assert_txt(calc(5).sin(&d("1e300")).unwrap(), "-0.98575");
    budget(t0, max);

    assert_txt(
        calc(200).cos(&d("1e60")).unwrap(),
        concat!(
            "-0.",
            "55718294824856670897291642059139899268913289606719",
            "40028335315032295405879830868569609076786492324280",
            "44517765393093989922043322784633049563478958972862",
            "10323687081799624371324074757417188911018700475013",
        ),
    );
    budget(t0, max);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_log_domaine() {
    let c = calc(10);
    for s in ["0", "-1", "-1e-30"] {
        assert!(
            matches!(c.log(&d(s)), Err(ErreurCalcul::Domaine { .. })),
            "log({s})"
        );
    }
}

#[test]
fn sci_sqrt_negatif_domaine() {
    assert!(matches!(
        calc(10).sqrt(&d("-2")),
        Err(ErreurCalcul::Domaine { operation: "sqrt", .. })
    ));
    assert_txt(calc(10).sqrt(&d("0")).unwrap(), "0.0000000000");
}

#[test]
fn sci_tan_pole() {
    // cos(1.5708) ≈ −3.7e−6 : nul à l’échelle de travail (2 + marge)
    assert_eq!(
        calc(2).tan(&d("1.5708")).unwrap_err(),
        ErreurCalcul::Division { operation: "tan" }
    );
}

#[test]
fn sci_configuration() {
    assert!(matches!(
        CalculDecimal::new(-5),
        Err(ErreurCalcul::Configuration { echelle: -5, .. })
    ));
    assert!(matches!(
        CalculDecimal::new(i64::from(ECHELLE_MAX) + 1),
        Err(ErreurCalcul::Configuration { .. })
    ));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_echelle_max_safe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);

    let c = calc(i64::from(ECHELLE_MAX));
    assert_eq!(c.exp(&d("1")).unwrap(), constantes::e().arrondi(ECHELLE_MAX));
    budget(t0, max);

    assert_eq!(c.log(&d("2")).unwrap(), constantes::ln_2().arrondi(ECHELLE_MAX));
    budget(t0, max);

    assert_eq!(c.sin(constantes::pi()).unwrap(), d("0"));
    assert_eq!(c.cos(constantes::pi()).unwrap(), d("-1"));
    budget(t0, max);
}

#[test]
fn sci_idempotence_meme_instance() {
    let c = calc(25);
    let x = d("0.7071");
    for _ in 0..3 {
        assert_eq!(c.exp(&x).unwrap().to_string(), c.exp(&x).unwrap().to_string());
        assert_eq!(c.log(&x).unwrap().to_string(), c.log(&x).unwrap().to_string());
        assert_eq!(c.tan(&x).unwrap().to_string(), c.tan(&x).unwrap().to_string());
    }
}

#[test]
fn sci_instances_concurrentes() {
    // une instance par thread : aucun état partagé entre elles
    let fils: Vec<_> = (0..4)
        .map(|k| {
            std::thread::spawn(move || {
                let c = calc(12 + k);
                c.sqrt(&d("2")).unwrap().arrondi(12).to_string()
            })
        })
        .collect();

    for f in fils {
        assert_eq!(f.join().unwrap(), "1.414213562373");
    }
}
