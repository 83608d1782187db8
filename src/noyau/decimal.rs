// src/noyau/decimal.rs
//
// Décimal à précision arbitraire : mantisse BigInt × 10^-echelle.
// - add / sub / mul : exacts (l’échelle suit les opérandes)
// - div / arrondi   : échelle cible explicite, arrondi demi-pair partout
// - égalité / ordre : par valeur (2.50 == 2.5)

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Debug)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

/* ------------------------ Outils entiers ------------------------ */

pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// n / d arrondi demi-pair (d ≠ 0).
fn div_arrondi(n: &BigInt, d: &BigInt) -> BigInt {
    let q = n / d;
    let r = n % d;
    if r.is_zero() {
        return q;
    }

    // sens de l’écart : celui du quotient exact
    let pas = if n.sign() == d.sign() {
        BigInt::one()
    } else {
        -BigInt::one()
    };

    match (r.abs() * 2u32).cmp(&d.abs()) {
        Ordering::Less => q,
        Ordering::Greater => q + pas,
        Ordering::Equal => {
            if (&q % BigInt::from(2)).is_zero() {
                q
            } else {
                q + pas
            }
        }
    }
}

/* ------------------------ Construction ------------------------ */

impl Decimal {
    pub fn new(mantisse: BigInt, echelle: u32) -> Self {
        Self { mantisse, echelle }
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    /// Rationnel exact -> décimal à `echelle` chiffres (demi-pair).
    pub fn from_rational(r: &BigRational, echelle: u32) -> Self {
        let n = r.numer() * pow10(echelle);
        Self::new(div_arrondi(&n, r.denom()), echelle)
    }

    /// Construit depuis un littéral "[-]chiffres[.chiffres]" connu à la compilation.
    /// Les caractères hors chiffres, '-' et '.' sont ignorés.
    pub(crate) fn depuis_litteral(s: &str) -> Self {
        let mut mantisse = BigInt::zero();
        let mut echelle = 0u32;
        let mut apres_point = false;
        let mut negatif = false;

        for c in s.chars() {
            match c {
                '-' => negatif = true,
                '.' => apres_point = true,
                '0'..='9' => {
                    mantisse = mantisse * 10u32 + (c as u32 - '0' as u32);
                    if apres_point {
                        echelle += 1;
                    }
                }
                _ => {}
            }
        }

        if negatif {
            mantisse = -mantisse;
        }
        Self::new(mantisse, echelle)
    }

    /* ------------------------ Signe / grandeur ------------------------ */

    pub fn is_negative(&self) -> bool {
        self.mantisse.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantisse.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.mantisse.abs(), self.echelle)
    }

    pub fn signum(&self) -> Sign {
        self.mantisse.sign()
    }

    /// floor(log10 |x|), None pour zéro.
    pub fn exposant(&self) -> Option<i64> {
        if self.mantisse.is_zero() {
            return None;
        }
        let chiffres = self.mantisse.magnitude().to_str_radix(10).len() as i64;
        Some(chiffres - 1 - i64::from(self.echelle))
    }

    /// Nombre de chiffres de la partie entière (0 si |x| < 1).
    pub fn chiffres_entiers(&self) -> u32 {
        match self.exposant() {
            Some(e) if e >= 0 => (e + 1) as u32,
            _ => 0,
        }
    }

    /* ------------------------ Arrondi / division ------------------------ */

    /// Ramène à exactement `echelle` chiffres fractionnaires (demi-pair).
    pub fn arrondi(&self, echelle: u32) -> Self {
        match echelle.cmp(&self.echelle) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(
                &self.mantisse * pow10(echelle - self.echelle),
                echelle,
            ),
            Ordering::Less => Self::new(
                div_arrondi(&self.mantisse, &pow10(self.echelle - echelle)),
                echelle,
            ),
        }
    }

    /// self / autre à `echelle` chiffres (demi-pair).
    pub fn div(&self, autre: &Decimal, echelle: u32) -> Resultat<Self> {
        if autre.mantisse.is_zero() {
            return Err(ErreurCalcul::Division {
                operation: "division",
            });
        }

        // q = (m1 / 10^e1) / (m2 / 10^e2) × 10^echelle
        let k = i64::from(echelle) + i64::from(autre.echelle) - i64::from(self.echelle);
        let (n, d) = if k >= 0 {
            (&self.mantisse * pow10(k as u32), autre.mantisse.clone())
        } else {
            (self.mantisse.clone(), &autre.mantisse * pow10((-k) as u32))
        };
        Ok(Self::new(div_arrondi(&n, &d), echelle))
    }

    /// self / d (entier) à `echelle` chiffres (demi-pair).
    pub fn div_entier(&self, d: &BigInt, echelle: u32) -> Resultat<Self> {
        self.div(&Decimal::from(d.clone()), echelle)
    }

    /// Reste tronqué : x − trunc(x / m)·m, du signe de x.
    pub fn reste(&self, m: &Decimal) -> Resultat<Self> {
        if m.mantisse.is_zero() {
            return Err(ErreurCalcul::Division { operation: "reste" });
        }
        let (a, b, echelle) = aligne(self, m);
        Ok(Self::new(a % b, echelle))
    }

    /// Forme réduite (zéros de queue retirés), pour le hachage.
    fn normalise(&self) -> Self {
        let mut m = self.mantisse.clone();
        let mut e = self.echelle;
        let dix = BigInt::from(10);
        while e > 0 && !m.is_zero() && (&m % &dix).is_zero() {
            m /= &dix;
            e -= 1;
        }
        if m.is_zero() {
            e = 0;
        }
        Self::new(m, e)
    }
}

/// Met deux décimaux à la même échelle (la plus grande).
fn aligne(a: &Decimal, b: &Decimal) -> (BigInt, BigInt, u32) {
    match a.echelle.cmp(&b.echelle) {
        Ordering::Equal => (a.mantisse.clone(), b.mantisse.clone(), a.echelle),
        Ordering::Less => (
            &a.mantisse * pow10(b.echelle - a.echelle),
            b.mantisse.clone(),
            b.echelle,
        ),
        Ordering::Greater => (
            a.mantisse.clone(),
            &b.mantisse * pow10(a.echelle - b.echelle),
            a.echelle,
        ),
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<BigInt> for Decimal {
    fn from(n: BigInt) -> Self {
        Self::new(n, 0)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::new(BigInt::from(n), 0)
    }
}

impl From<u32> for Decimal {
    fn from(n: u32) -> Self {
        Self::new(BigInt::from(n), 0)
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        (&self.mantisse / pow10(self.echelle)).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        (&self.mantisse / pow10(self.echelle)).to_u64()
    }

    /// Passe par le texte : pas de 10^echelle hors bornes f64.
    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse::<f64>().ok()
    }
}

/* ------------------------ Égalité / ordre (par valeur) ------------------------ */

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = aligne(self, other);
        a.cmp(&b)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalise();
        n.mantisse.hash(state);
        n.echelle.hash(state);
    }
}

/* ------------------------ Opérations exactes ------------------------ */

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let (a, b, echelle) = aligne(self, rhs);
        Decimal::new(a + b, echelle)
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let (a, b, echelle) = aligne(self, rhs);
        Decimal::new(a - b, echelle)
    }
}

impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::new(&self.mantisse * &rhs.mantisse, self.echelle + rhs.echelle)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-self.mantisse, self.echelle)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-&self.mantisse, self.echelle)
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }
}
