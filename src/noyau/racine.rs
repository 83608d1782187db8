// src/noyau/racine.rs
//
// √a par Newton–Raphson, précision doublée à chaque pas
// -----------------------------------------------------
// x_{n+1} = x_n − (x_n² − a) / (2·x_n)
// - graine : √ en f64 (repli 10^(exposant/2) si l’f64 déborde)
// - échelle de travail : ECHELLE_DEPART, puis ×2 à chaque pas, plafonnée à la cible
// - arrêt : échelle cible atteinte et pas ≤ 1 ulp

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use super::decimal::{pow10, Decimal};
use super::erreur::{ErreurCalcul, Resultat};
use super::taylor::{GARDE, ITERATIONS_MAX};

/// Chiffres de la première itération (≈ précision de la graine f64).
const ECHELLE_DEPART: u32 = 16;

/// √a arrondie à `echelle`. DomainError si a < 0.
pub fn sqrt(a: &Decimal, echelle: u32) -> Resultat<Decimal> {
    if a.is_negative() {
        return Err(ErreurCalcul::Domaine {
            operation: "sqrt",
            valeur: a.to_string(),
        });
    }
    if a.is_zero() {
        return Ok(Decimal::zero().arrondi(echelle));
    }

    let cible = echelle + GARDE;
    let exposant = a.exposant().unwrap_or(0);

    // zéros de tête de √a : la première échelle doit déjà les dépasser
    let decalage = if exposant < 0 {
        ((-exposant) / 2 + 1) as u32
    } else {
        0
    };
    let mut travail = (ECHELLE_DEPART + decalage).min(cible);
    let mut x = graine(a, exposant).arrondi(travail);
    if x.is_zero() {
        x = Decimal::new(BigInt::one(), travail);
    }

    let deux = Decimal::from(2i64);
    let ulp = Decimal::new(BigInt::one(), cible);

    for iteration in 1..=ITERATIONS_MAX {
        let pas_echelle = (2 * travail).min(cible);

        let correction = (&(&x * &x) - a).div(&(&deux * &x), pas_echelle)?;
        let suivant = (&x - &correction).arrondi(pas_echelle);

        let converge = travail == cible && (&suivant - &x).abs() <= ulp;
        x = suivant;
        travail = pas_echelle;

        if converge {
            tracing::trace!(iterations = iteration, echelle, "sqrt : Newton convergé");
            return Ok(x.arrondi(echelle));
        }
    }

    Err(ErreurCalcul::Invariant {
        operation: "sqrt",
        iterations: ITERATIONS_MAX,
    })
}

/// Approximation de départ : f64 si représentable, sinon 10^⌊exposant/2⌋.
fn graine(a: &Decimal, exposant: i64) -> Decimal {
    let flottante = a
        .to_f64()
        .map(f64::sqrt)
        .filter(|v| v.is_finite() && *v > 0.0)
        .and_then(Decimal::depuis_f64);

    flottante.unwrap_or_else(|| {
        let demi = exposant.div_euclid(2);
        if demi >= 0 {
            Decimal::from(pow10(demi as u32))
        } else {
            Decimal::new(BigInt::one(), (-demi) as u32)
        }
    })
}
