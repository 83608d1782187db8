// src/noyau/taylor.rs
//
// Évaluateur de séries de Taylor (mécanique commune)
// ---------------------------------------------------
// - une seule boucle pour toutes les séries (Serie = stratégie choisie par l’appelant)
// - termes calculés et arrondis à l’échelle de garde (echelle + GARDE)
// - arrêt : deux sommes partielles consécutives égales à l’échelle cible
// - factorielles mémorisées dans un cache possédé par l’évaluateur
//
// Pré-condition : l’argument est déjà réduit (termes décroissants à terme).
// Le garde-fou ITERATIONS_MAX transforme une boucle infinie en erreur Invariant.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::sync::{Mutex, PoisonError};

use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};

/// Chiffres de garde ajoutés pendant l’accumulation.
pub const GARDE: u32 = 4;

/// Garde-fou : jamais atteint pour un argument correctement réduit.
pub const ITERATIONS_MAX: usize = 100_000;

/// Taille de la table pré-remplie (0! .. 15!).
const FACTORIELLES_INITIALES: usize = 16;

/* ------------------------ Séries connues ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Serie {
    /// e^x = Σ x^i / i!
    Exponentielle,
    /// ln(1+u) = Σ (−1)^(i+1) u^i / i, i ≥ 1
    Logarithme,
    /// cos x = Σ (−1)^i x^(2i) / (2i)!
    Cosinus,
}

impl Serie {
    pub fn nom(self) -> &'static str {
        match self {
            Serie::Exponentielle => "exp",
            Serie::Logarithme => "log",
            Serie::Cosinus => "cos",
        }
    }

    /// Terme d’indice 0 (hors boucle).
    fn somme_initiale(self) -> Decimal {
        match self {
            Serie::Exponentielle | Serie::Cosinus => Decimal::one(),
            Serie::Logarithme => Decimal::zero(),
        }
    }

    /// La puissance avance de x (exp, log) ou de x² (cos) à chaque indice.
    fn facteur(self, x: &Decimal, garde: u32) -> Decimal {
        match self {
            Serie::Cosinus => (x * x).arrondi(garde),
            Serie::Exponentielle | Serie::Logarithme => x.clone(),
        }
    }

    fn terme_negatif(self, i: usize) -> bool {
        match self {
            Serie::Exponentielle => false,
            Serie::Logarithme => i % 2 == 0,
            Serie::Cosinus => i % 2 == 1,
        }
    }
}

/* ------------------------ Cache de factorielles ------------------------ */

/// Table n! qui ne fait que grandir. Verrou interne : l’évaluateur reste partageable.
#[derive(Debug)]
pub struct CacheFactorielles {
    table: Mutex<Vec<BigInt>>,
}

impl Default for CacheFactorielles {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheFactorielles {
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(FACTORIELLES_INITIALES);
        let mut f = BigInt::one();
        table.push(f.clone());
        for n in 1..FACTORIELLES_INITIALES {
            f *= BigInt::from(n);
            table.push(f.clone());
        }
        Self {
            table: Mutex::new(table),
        }
    }

    /// n! (calculé puis mémorisé au-delà de la table).
    pub fn get(&self, n: usize) -> BigInt {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        while table.len() <= n {
            let k = table.len();
            let suivante = &table[k - 1] * BigInt::from(k);
            table.push(suivante);
        }
        table[n].clone()
    }

    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/* ------------------------ Évaluateur ------------------------ */

#[derive(Debug, Default)]
pub struct Taylor {
    factorielles: CacheFactorielles,
}

impl Taylor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factorielles(&self) -> &CacheFactorielles {
        &self.factorielles
    }

    /// Somme la série `serie` en `x` et rend le résultat arrondi à `echelle`.
    pub fn evaluer(&self, serie: Serie, x: &Decimal, echelle: u32) -> Resultat<Decimal> {
        self.evaluer_borne(serie, x, echelle, ITERATIONS_MAX)
    }

    fn evaluer_borne(
        &self,
        serie: Serie,
        x: &Decimal,
        echelle: u32,
        iterations_max: usize,
    ) -> Resultat<Decimal> {
        let garde = echelle + GARDE;
        let x = x.arrondi(garde);
        let facteur = serie.facteur(&x, garde);

        let mut somme = serie.somme_initiale();
        let mut puissance = Decimal::one();

        for i in 1..=iterations_max {
            puissance = (&puissance * &facteur).arrondi(garde);
            let terme = puissance.div_entier(&self.denominateur(serie, i), garde)?;

            let suivante = if serie.terme_negatif(i) {
                &somme - &terme
            } else {
                &somme + &terme
            };

            // point fixe à l’échelle cible
            if suivante.arrondi(echelle) == somme.arrondi(echelle) {
                tracing::trace!(serie = serie.nom(), iterations = i, echelle, "série convergée");
                return Ok(suivante.arrondi(echelle));
            }
            somme = suivante;
        }

        Err(ErreurCalcul::Invariant {
            operation: serie.nom(),
            iterations: iterations_max,
        })
    }

    fn denominateur(&self, serie: Serie, i: usize) -> BigInt {
        match serie {
            Serie::Exponentielle => self.factorielles.get(i),
            Serie::Logarithme => BigInt::from(i),
            Serie::Cosinus => self.factorielles.get(2 * i),
        }
    }
}
