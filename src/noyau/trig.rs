// src/noyau/trig.rs
//
// Trig décimale (radians) pour sin/cos/tan
// -----------------------------------------
// - Réduction modulo 2π (reste contre 2π), puis repli dans [−π, π]
//   π porte exposant(x) chiffres de plus que la garde : le quotient x/2π ne les mange pas
// - cos : série de Taylor sur l’argument réduit
// - sin : cos(x mod 2π − π/2) (même évaluateur, pas de seconde série)
// - tan : sin / cos ; cos nul à l’échelle de travail => DivisionError

use num_traits::Zero;

use super::constantes;
use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};
use super::taylor::{Serie, Taylor, GARDE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

/// Point d’entrée unique : f(x) arrondi à `echelle`.
pub fn trig(taylor: &Taylor, f: TrigFn, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    match f {
        TrigFn::Cos => cos(taylor, x, echelle),
        TrigFn::Sin => sin(taylor, x, echelle),
        TrigFn::Tan => tan(taylor, x, echelle),
    }
}

/* ------------------------ Réduction d’argument ------------------------ */

/// x mod 2π replié dans [−π, π], arrondi à `garde`.
pub fn reduire(x: &Decimal, garde: u32) -> Resultat<Decimal> {
    let entiers = x
        .exposant()
        .map_or(0, |e| u32::try_from(e.max(0)).unwrap_or(u32::MAX));
    let chiffres = garde.saturating_add(entiers).saturating_add(2);

    let pi = constantes::pi_a(chiffres);
    let deux_pi = &pi * &Decimal::from(2i64);

    let mut r = x.reste(&deux_pi)?;
    if r > pi {
        r = &r - &deux_pi;
    } else if r < -&pi {
        r = &r + &deux_pi;
    }
    Ok(r.arrondi(garde))
}

/* ------------------------ cos / sin / tan ------------------------ */

fn cos(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    let r = reduire(x, echelle + GARDE)?;
    taylor.evaluer(Serie::Cosinus, &r, echelle)
}

fn sin(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    let garde = echelle + GARDE;
    let r = reduire(x, garde)?;
    let decale = (&r - &constantes::demi_pi_a(garde)).arrondi(garde);
    cos(taylor, &decale, echelle)
}

fn tan(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    let c = cos(taylor, x, echelle)?;
    if c.is_zero() {
        return Err(ErreurCalcul::Division { operation: "tan" });
    }

    // |tan| ~ 1/|cos| : deux chiffres par zéro de tête de cos, argument réduit compris
    let zeros = c.exposant().map_or(0, |e| (-e).max(0) as u32);
    let travail = echelle + 2 * zeros + 1;
    if zeros > 1 {
        tracing::debug!(zeros, travail, "tan : rattrapage près d’un pôle");
    }

    let s = sin(taylor, x, travail)?;
    let c = cos(taylor, x, travail)?;
    s.div(&c, echelle)
}
