// src/lib.rs
//
// Calcul décimal : fonctions élémentaires à précision arbitraire
// --------------------------------------------------------------
// exp, log, pow, sqrt, sin, cos, tan, chacune rendue à une échelle
// (nombre de décimales) choisie à la construction, arrondi demi-pair.
//
// Usage :
//   let calc = CalculDecimal::new(10)?;
//   let r = calc.sqrt(&"2".parse()?)?;   // 1.4142135624
//
// Aucune E/S. Seul état global : π mémorisé au-delà des littéraux (valeurs
// figées une fois calculées). Une instance par échelle, et par thread si l’on
// veut éviter le verrou du cache de factorielles.

pub mod noyau;

pub use noyau::calcul::{CalculDecimal, ECHELLE_DEFAUT, ECHELLE_MAX};
pub use noyau::constantes;
pub use noyau::decimal::Decimal;
pub use noyau::erreur::{ErreurCalcul, Resultat};
