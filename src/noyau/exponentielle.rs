// src/noyau/exponentielle.rs
//
// e^x par la série de Taylor, sans réduction d’argument.
// - x < 0  : e^x = 1 / e^|x| (pas d’annulation entre termes alternés)
// - x ≥ 0  : chiffres de travail élargis du nombre de chiffres entiers de e^x,
//            pour que l’erreur absolue reste sous l’échelle demandée

use num_traits::{One, ToPrimitive};
use std::f64::consts::LOG10_E;

use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};
use super::taylor::{Serie, Taylor, GARDE};

/// e^x arrondi à `echelle`.
pub fn exp(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    if x.is_negative() {
        tracing::debug!(echelle, "exp : argument négatif, passage par 1/e^|x|");
        let travail = echelle + GARDE;
        let positif = exp_positif(taylor, &x.abs(), travail)?;
        return Decimal::one().div(&positif, echelle);
    }
    exp_positif(taylor, x, echelle)
}

fn exp_positif(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    let extra = chiffres_entiers_exp(x).ok_or_else(|| ErreurCalcul::Capacite {
        operation: "exp",
        valeur: x.to_string(),
    })?;
    let r = taylor.evaluer(Serie::Exponentielle, x, echelle + extra)?;
    Ok(r.arrondi(echelle))
}

/// Estimation de ⌈x·log10(e)⌉ + 1 (nombre de chiffres entiers de e^x), x ≥ 0.
/// None si ce nombre ne tient pas dans un u32 (x hors des f64 finis ou trop grand).
fn chiffres_entiers_exp(x: &Decimal) -> Option<u32> {
    let v = x.to_f64().filter(|v| v.is_finite())?;
    let n = (v * LOG10_E).ceil() + 1.0;
    (n <= f64::from(u32::MAX)).then_some(n as u32)
}
