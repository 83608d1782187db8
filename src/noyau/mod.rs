//! Noyau décimal
//!
//! Organisation interne :
//! - decimal.rs       : type Decimal (BigInt × 10^-echelle), arrondi demi-pair
//! - format.rs        : affichage / lecture texte
//! - erreur.rs        : DomainError, DivisionError, ConfigurationError, ...
//! - constantes.rs    : e, π, 2π, π/2, ln(2) (littéraux figés)
//! - taylor.rs        : boucle de convergence commune + cache de factorielles
//! - exponentielle.rs : e^x
//! - logarithme.rs    : ln(x) (réduction par moitiés)
//! - trig.rs          : cos, puis sin / tan dérivés (réduction mod 2π)
//! - racine.rs        : √ par Newton à précision doublée
//! - calcul.rs        : façade (échelle figée)

pub mod calcul;
pub mod constantes;
pub mod decimal;
pub mod erreur;
pub mod exponentielle;
pub mod format;
pub mod logarithme;
pub mod racine;
pub mod taylor;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calcul::CalculDecimal;
