// src/noyau/format.rs
//
// Texte <-> Decimal
// - affichage : exactement `echelle` chiffres après la virgule (pas de "-0")
// - lecture   : [-+]chiffres[.chiffres][e[-+]chiffres]

use num_bigint::BigInt;
use num_traits::Signed;

use std::fmt;
use std::str::FromStr;

use super::decimal::{pow10, Decimal};
use super::erreur::ErreurCalcul;

/// Décalage décimal maximal accepté à la lecture (échelle ou zéros ajoutés).
pub const DECALAGE_LECTURE_MAX: u32 = 100_000;

/* ------------------------ Décimal -> texte ------------------------ */

/// Entier “scalé” (×10^digits) -> texte décimal.
fn scaled_to_decimal(scaled: &BigInt, digits: u32) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let frac = frac_part.to_str_radix(10);
    let zeros = "0".repeat(digits as usize - frac.len());
    format!("{signe}{int_part}.{zeros}{frac}")
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let txt = scaled_to_decimal(self.mantisse(), self.echelle());
        f.pad(&txt)
    }
}

/* ------------------------ Texte -> Décimal ------------------------ */

impl FromStr for Decimal {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let erreur = || ErreurCalcul::Lecture { texte: s.to_string() };

        let t = s.trim();
        let (negatif, t) = match t.as_bytes().first() {
            Some(b'-') => (true, &t[1..]),
            Some(b'+') => (false, &t[1..]),
            _ => (false, t),
        };

        // exposant optionnel
        let (corps, exposant) = match t.find(['e', 'E']) {
            Some(i) => {
                let e: i64 = t[i + 1..].parse().map_err(|_| erreur())?;
                (&t[..i], e)
            }
            None => (t, 0),
        };

        let (entier, fraction) = match corps.split_once('.') {
            Some((a, b)) => (a, b),
            None => (corps, ""),
        };

        if entier.is_empty() && fraction.is_empty() {
            return Err(erreur());
        }
        if !entier.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(erreur());
        }

        let chiffres = format!("{entier}{fraction}");
        let mut mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(erreur)?;
        if negatif {
            mantisse = -mantisse;
        }

        // valeur = mantisse × 10^(exposant − len(fraction))
        let decalage = exposant.saturating_sub(fraction.len() as i64);
        let k = u32::try_from(decalage.unsigned_abs())
            .ok()
            .filter(|k| *k <= DECALAGE_LECTURE_MAX)
            .ok_or_else(erreur)?;
        if decalage >= 0 {
            Ok(Decimal::new(mantisse * pow10(k), 0))
        } else {
            Ok(Decimal::new(mantisse, k))
        }
    }
}

impl Decimal {
    /// Graine f64 -> décimal (notation scientifique de Rust, toujours relisible).
    pub(crate) fn depuis_f64(v: f64) -> Option<Decimal> {
        if !v.is_finite() {
            return None;
        }
        format!("{v:e}").parse().ok()
    }
}
