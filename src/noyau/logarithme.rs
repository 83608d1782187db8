// src/noyau/logarithme.rs
//
// ln(x) par réduction d’argument + série ln(1+u)
// ----------------------------------------------
// 1) x < 1 : ln(x) = −ln(1/x)
// 2) x ≥ 1 : x /= 2 (n fois) jusqu’à x < 1
// 3) ln(x) = n·ln(2) + ln(1 + (x − 1)), avec x − 1 ∈ [−1/2, 0)

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::constantes::{self, PRECISION_CONSTANTES};
use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};
use super::taylor::{Serie, Taylor, GARDE};

/// ln(x) arrondi à `echelle`. DomainError si x ≤ 0.
pub fn log(taylor: &Taylor, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
    if !x.is_positive() {
        return Err(ErreurCalcul::Domaine {
            operation: "log",
            valeur: x.to_string(),
        });
    }

    let un = Decimal::one();
    if *x == un {
        return Ok(Decimal::zero().arrondi(echelle));
    }

    let garde = echelle + GARDE;

    if *x < un {
        let inverse = un.div(x, garde)?;
        return Ok(-log(taylor, &inverse, echelle)?);
    }

    // moitiés successives (arrondies à la garde : erreur cumulée < 1 ulp de garde)
    let deux = BigInt::from(2);
    let mut y = x.arrondi(garde);
    let mut n: u64 = 0;
    while y >= un {
        y = y.div_entier(&deux, garde)?;
        n += 1;
    }
    tracing::debug!(divisions = n, echelle, "log : réduction par moitiés");

    let serie = taylor.evaluer(Serie::Logarithme, &(&y - &un), garde)?;
    let multiple = (&Decimal::from(BigInt::from(n)) * &ln_2_a(taylor, garde)?).arrondi(garde);

    Ok((&multiple + &serie).arrondi(echelle))
}

/// ln(2) avec au moins `echelle` décimales : littéral si possible, sinon −ln(1 − 1/2).
fn ln_2_a(taylor: &Taylor, echelle: u32) -> Resultat<Decimal> {
    if echelle + GARDE <= PRECISION_CONSTANTES {
        return Ok(constantes::ln_2().clone());
    }
    let moins_demi = Decimal::new(BigInt::from(-5), 1);
    Ok(-taylor.evaluer(Serie::Logarithme, &moins_demi, echelle + GARDE)?)
}
