//! Noyau : façade publique
//!
//! Une instance = une échelle cible figée + son évaluateur de Taylor (cache de
//! factorielles compris). Chaque opération délègue à sa stratégie avec
//! MARGE chiffres de plus, puis arrondit une seule fois à l’échelle cible
//! (demi-pair).
//!
//! Contrats :
//! - fonctions pures : même argument => même résultat, bit à bit
//! - erreurs remontées telles quelles (pas de reprise, pas de résultat partiel)

use num_traits::{One, ToPrimitive, Zero};
use std::f64::consts::LN_10;

use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};
use super::exponentielle;
use super::logarithme;
use super::racine;
use super::taylor::{Taylor, GARDE};
use super::trig::{trig, TrigFn};

/// Échelle par défaut (`CalculDecimal::default()`).
pub const ECHELLE_DEFAUT: u32 = 20;

/// Garde-fou : les constantes couvrent cette échelle + garde + rattrapage.
pub const ECHELLE_MAX: u32 = 200;

/// Chiffres ajoutés par la façade avant délégation.
pub const MARGE: u32 = 2;

#[derive(Debug)]
pub struct CalculDecimal {
    echelle: u32,
    taylor: Taylor,
}

impl Default for CalculDecimal {
    fn default() -> Self {
        Self {
            echelle: ECHELLE_DEFAUT,
            taylor: Taylor::new(),
        }
    }
}

impl TryFrom<i64> for CalculDecimal {
    type Error = ErreurCalcul;

    fn try_from(echelle: i64) -> Resultat<Self> {
        Self::new(echelle)
    }
}

impl CalculDecimal {
    /// ConfigurationError si l’échelle est négative ou dépasse ECHELLE_MAX.
    pub fn new(echelle: i64) -> Resultat<Self> {
        let echelle = u32::try_from(echelle)
            .ok()
            .filter(|e| *e <= ECHELLE_MAX)
            .ok_or(ErreurCalcul::Configuration {
                echelle,
                max: ECHELLE_MAX,
            })?;

        Ok(Self {
            echelle,
            taylor: Taylor::new(),
        })
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    fn travail(&self) -> u32 {
        self.echelle + MARGE
    }

    fn finalise(&self, r: Decimal) -> Decimal {
        r.arrondi(self.echelle)
    }

    /* ------------------------ exp / log / pow ------------------------ */

    pub fn exp(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(exponentielle::exp(&self.taylor, x, self.travail())?))
    }

    pub fn log(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(logarithme::log(&self.taylor, x, self.travail())?))
    }

    /// base^exposant = exp(exposant · log(base)), base > 0.
    pub fn pow(&self, base: &Decimal, exposant: &Decimal) -> Resultat<Decimal> {
        if !base.is_positive() {
            return Err(ErreurCalcul::Domaine {
                operation: "pow",
                valeur: base.to_string(),
            });
        }
        if exposant.is_zero() {
            return Ok(self.finalise(Decimal::one()));
        }

        // erreur relative du résultat ≈ erreur absolue sur exposant·ln(base)
        let travail = self.travail()
            + GARDE
            + exposant.chiffres_entiers()
            + chiffres_entiers_puissance(base, exposant);

        let ln_base = logarithme::log(&self.taylor, base, travail)?;
        let y = (&ln_base * exposant).arrondi(travail);
        Ok(self.finalise(exponentielle::exp(&self.taylor, &y, self.travail())?))
    }

    /* ------------------------ sqrt ------------------------ */

    /// DomainError si x < 0.
    pub fn sqrt(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(racine::sqrt(x, self.travail())?))
    }

    /* ------------------------ trig (radians) ------------------------ */

    pub fn cos(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(trig(&self.taylor, TrigFn::Cos, x, self.travail())?))
    }

    pub fn sin(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(trig(&self.taylor, TrigFn::Sin, x, self.travail())?))
    }

    /// DivisionError si cos(x) est nul à l’échelle de travail.
    pub fn tan(&self, x: &Decimal) -> Resultat<Decimal> {
        Ok(self.finalise(trig(&self.taylor, TrigFn::Tan, x, self.travail())?))
    }
}

/// Estimation du nombre de chiffres entiers de base^exposant (0 si < 1).
fn chiffres_entiers_puissance(base: &Decimal, exposant: &Decimal) -> u32 {
    let ln_base = match base.to_f64().filter(|b| b.is_finite() && *b > 0.0) {
        Some(b) => b.ln(),
        // hors f64 : ln(base) ≈ (exposant décimal + 1)·ln(10)
        None => (base.exposant().unwrap_or(0) as f64 + 1.0) * LN_10,
    };
    let y = exposant.to_f64().unwrap_or(0.0) * ln_base;
    if y.is_finite() && y > 0.0 {
        ((y / LN_10).ceil() + 1.0).min(f64::from(u32::MAX / 4)) as u32
    } else {
        0
    }
}
