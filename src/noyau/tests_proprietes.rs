//! Tests de propriétés (proptest) : identités vérifiées à quelques ulp près.
//!
//! Les tolérances suivent l’arrondi final demi-pair (≤ ½ ulp par résultat)
//! propagé dans l’identité testée.

use num_bigint::BigInt;
use proptest::prelude::*;

use super::calcul::CalculDecimal;
use super::decimal::Decimal;
use super::erreur::ErreurCalcul;

fn calc(echelle: u32) -> CalculDecimal {
    CalculDecimal::new(i64::from(echelle)).unwrap()
}

/// |a − b| ≤ k·10^(−echelle)
fn proche(a: &Decimal, b: &Decimal, k: i64, echelle: u32) -> bool {
    (a - b).abs() <= Decimal::new(BigInt::from(k), echelle)
}

/// m·10^(−s)
fn dec(m: i64, s: u32) -> Decimal {
    Decimal::new(BigInt::from(m), s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exp_log_inverse(m in 1i64..=20_000, echelle in 5u32..=30) {
        // x ∈ (0, 2]
        let c = calc(echelle);
        let x = dec(m, 4);
        let r = c.exp(&c.log(&x).unwrap()).unwrap();
        prop_assert!(proche(&r, &x, 2, echelle), "x={} r={}", x, r);
    }

    #[test]
    fn cos2_plus_sin2(m in -50_000i64..=50_000, echelle in 5u32..=30) {
        let c = calc(echelle);
        let x = dec(m, 3);
        let co = c.cos(&x).unwrap();
        let si = c.sin(&x).unwrap();
        let somme = &(&co * &co) + &(&si * &si);
        prop_assert!(proche(&somme, &Decimal::from(1i64), 2, echelle), "x={} somme={}", x, somme);
    }

    #[test]
    fn sqrt_au_carre(m in 0i64..=40_000, echelle in 1u32..=30) {
        // x ∈ [0, 4]
        let c = calc(echelle);
        let x = dec(m, 4);
        let r = c.sqrt(&x).unwrap();
        prop_assert!(proche(&(&r * &r), &x, 3, echelle), "x={} r={}", x, r);
    }

    #[test]
    fn pow_entier_contre_produit(m in 1i64..=300, n in 1i64..=8, k in 0usize..3) {
        let echelle = [0u32, 6, 12][k];
        let c = calc(echelle);
        let base = dec(m, 2);

        let mut attendu = Decimal::from(1i64);
        for _ in 0..n {
            attendu = &attendu * &base;
        }

        let r = c.pow(&base, &Decimal::from(n)).unwrap();
        prop_assert!(proche(&r, &attendu, 1, echelle), "base={} n={} r={}", base, n, r);
    }

    #[test]
    fn appels_repetes_identiques(m in -20_000i64..=20_000, echelle in 0u32..=25) {
        let c = calc(echelle);
        let x = dec(m, 3);
        let y = x.abs() + Decimal::from(1i64);

        let a = (c.exp(&x), c.log(&y), c.sqrt(&y), c.sin(&x), c.cos(&x));
        let b = (c.exp(&x), c.log(&y), c.sqrt(&y), c.sin(&x), c.cos(&x));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.0.unwrap().to_string(), b.0.unwrap().to_string());
        prop_assert_eq!(a.3.unwrap().to_string(), b.3.unwrap().to_string());
    }

    #[test]
    fn log_hors_domaine(m in -1_000_000i64..=0, s in 0u32..=10) {
        let err = calc(10).log(&dec(m, s)).unwrap_err();
        let est_domaine = matches!(err, ErreurCalcul::Domaine { operation: "log", .. });
        prop_assert!(est_domaine);
    }
}
