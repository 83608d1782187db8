// src/noyau/erreur.rs
//
// Erreurs du noyau décimal.
// - levées au point de violation, propagées telles quelles (pas de reprise)
// - messages en clair : la couche appelante décide quoi afficher

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Argument hors du domaine mathématique (log ≤ 0, √ négatif).
    #[error("{operation} : argument hors domaine ({valeur})")]
    Domaine {
        operation: &'static str,
        valeur: String,
    },

    /// Diviseur nul à l’échelle de travail.
    #[error("{operation} : division par zéro")]
    Division { operation: &'static str },

    /// Échelle refusée à la construction.
    #[error("échelle invalide : {echelle} (attendu 0..={max})")]
    Configuration { echelle: i64, max: u32 },

    /// Boucle de convergence arrêtée par le garde-fou d’itérations.
    #[error("{operation} : pas de convergence après {iterations} itérations")]
    Invariant {
        operation: &'static str,
        iterations: usize,
    },

    /// Résultat sans écriture décimale raisonnable (e^x pour x trop grand).
    #[error("{operation} : résultat hors capacité ({valeur})")]
    Capacite {
        operation: &'static str,
        valeur: String,
    },

    /// Littéral décimal illisible.
    #[error("décimal illisible : {texte:?}")]
    Lecture { texte: String },
}

pub type Resultat<T> = Result<T, ErreurCalcul>;
