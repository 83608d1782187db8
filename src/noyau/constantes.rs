// src/noyau/constantes.rs
//
// Constantes haute précision (littéraux décimaux figés)
// ------------------------------------------------------
// - e, π, 2π, π/2, ln(2) à PRECISION_CONSTANTES décimales (arrondi demi-pair)
// - couvre ECHELLE_MAX + chiffres de garde + chiffres de rattrapage (tan)
// - parsées une seule fois (OnceLock), partagées en lecture seule
// - π au-delà des littéraux : Machin, mémorisé par nombre de décimales

use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::decimal::{pow10, Decimal};

/// Nombre de décimales portées par chaque littéral.
pub const PRECISION_CONSTANTES: u32 = 250;

/// e à 250 décimales.
const E_TXT: &str = concat!(
    "2.",
    "71828182845904523536028747135266249775724709369995",
    "95749669676277240766303535475945713821785251664274",
    "27466391932003059921817413596629043572900334295260",
    "59563073813232862794349076323382988075319525101901",
    "15738341879307021540891499348841675092447614606681",
);

/// π à 250 décimales.
const PI_TXT: &str = concat!(
    "3.",
    "14159265358979323846264338327950288419716939937510",
    "58209749445923078164062862089986280348253421170679",
    "82148086513282306647093844609550582231725359408128",
    "48111745028410270193852110555964462294895493038196",
    "44288109756659334461284756482337867831652712019091",
);

/// 2π à 250 décimales.
const DEUX_PI_TXT: &str = concat!(
    "6.",
    "28318530717958647692528676655900576839433879875021",
    "16419498891846156328125724179972560696506842341359",
    "64296173026564613294187689219101164463450718816256",
    "96223490056820540387704221111928924589790986076392",
    "88576219513318668922569512964675735663305424038183",
);

/// π/2 à 250 décimales.
const DEMI_PI_TXT: &str = concat!(
    "1.",
    "57079632679489661923132169163975144209858469968755",
    "29104874722961539082031431044993140174126710585339",
    "91074043256641153323546922304775291115862679704064",
    "24055872514205135096926055277982231147447746519098",
    "22144054878329667230642378241168933915826356009546",
);

/// ln(2) à 250 décimales.
const LN_2_TXT: &str = concat!(
    "0.",
    "69314718055994530941723212145817656807550013436025",
    "52541206800094933936219696947156058633269964186875",
    "42001481020570685733685520235758130557032670751635",
    "07596193072757082837143519030703862389167347112335",
    "01153644979552391204751726815749320651555247341395",
);

/* ------------------------ Accès (cache paresseux) ------------------------ */

static E: OnceLock<Decimal> = OnceLock::new();
static PI: OnceLock<Decimal> = OnceLock::new();
static DEUX_PI: OnceLock<Decimal> = OnceLock::new();
static DEMI_PI: OnceLock<Decimal> = OnceLock::new();
static LN_2: OnceLock<Decimal> = OnceLock::new();

pub fn e() -> &'static Decimal {
    E.get_or_init(|| Decimal::depuis_litteral(E_TXT))
}

pub fn pi() -> &'static Decimal {
    PI.get_or_init(|| Decimal::depuis_litteral(PI_TXT))
}

pub fn deux_pi() -> &'static Decimal {
    DEUX_PI.get_or_init(|| Decimal::depuis_litteral(DEUX_PI_TXT))
}

pub fn demi_pi() -> &'static Decimal {
    DEMI_PI.get_or_init(|| Decimal::depuis_litteral(DEMI_PI_TXT))
}

pub fn ln_2() -> &'static Decimal {
    LN_2.get_or_init(|| Decimal::depuis_litteral(LN_2_TXT))
}

/* ------------------------ π à la demande ------------------------ */

/// Chiffres supplémentaires absorbant les troncatures de Machin.
const EXTRA: u32 = 10;

static PI_CALCULE: OnceLock<Mutex<HashMap<u32, Decimal>>> = OnceLock::new();

/// arctan(1/q) ×10^d via atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);
    let mut k: u64 = 0;
    let mut q_pow = q.clone();
    let mut sum = BigInt::zero();

    loop {
        let term = scale / (&q_pow * BigInt::from(2 * k + 1));
        if term.is_zero() {
            break;
        }
        if k % 2 == 0 {
            sum += &term;
        } else {
            sum -= &term;
        }
        q_pow *= &q;
        q_pow *= &q;
        k += 1;
    }
    sum
}

/// Machin : π = 16·atan(1/5) − 4·atan(1/239), arrondi à `digits`.
fn pi_machin(digits: u32) -> Decimal {
    let scale = pow10(digits + EXTRA);
    let pi = BigInt::from(16) * arctan_inv_q_scaled(5, &scale)
        - BigInt::from(4) * arctan_inv_q_scaled(239, &scale);
    Decimal::new(pi, digits + EXTRA).arrondi(digits)
}

/// π avec au moins `chiffres` décimales (littéral si suffisant).
pub fn pi_a(chiffres: u32) -> Decimal {
    if chiffres <= PRECISION_CONSTANTES {
        return pi().clone();
    }
    let cache = PI_CALCULE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut table = cache.lock().unwrap_or_else(PoisonError::into_inner);
    table
        .entry(chiffres)
        .or_insert_with(|| {
            tracing::debug!(chiffres, "π : calcul par Machin au-delà des littéraux");
            pi_machin(chiffres)
        })
        .clone()
}

/// π/2 avec au moins `chiffres` décimales (produit exact par 0.5).
pub fn demi_pi_a(chiffres: u32) -> Decimal {
    if chiffres <= PRECISION_CONSTANTES {
        return demi_pi().clone();
    }
    &pi_a(chiffres) * &Decimal::new(BigInt::from(5), 1)
}
