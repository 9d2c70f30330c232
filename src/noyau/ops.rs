// src/noyau/ops.rs
//
// Opérations binaires du moteur (+ − × ÷ ^ yroot) et l'erreur qui peut
// franchir la frontière du noyau.
//
// Contrat :
// - l'arithmétique f64 ne lève jamais : NaN / ±Infinity se propagent tels
//   quels dans le résultat (erreurs de domaine, §affichage)
// - SEULE la division par un zéro exact est une erreur (notification
//   utilisateur, puis remise à zéro par le moteur)

use thiserror::Error;

/// Erreur du noyau visible depuis la couche de présentation.
///
/// Les échecs de lecture d'opérande (NaN) restent des no-ops silencieux ;
/// ils ne passent jamais par ce type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Division par zéro impossible")]
    DivisionParZero,
}

/// Opérateur binaire en attente d'un second opérande.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpBinaire {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
    RacineY,
}

impl OpBinaire {
    /// Symbole affiché (ligne d'attente + historique).
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Addition => "+",
            OpBinaire::Soustraction => "−",
            OpBinaire::Multiplication => "×",
            OpBinaire::Division => "÷",
            OpBinaire::Puissance => "^",
            OpBinaire::RacineY => "yroot",
        }
    }

    /// Applique l'opérateur.
    ///
    /// `droite == 0.0` (zéro exact, y compris -0.0) ne vaut erreur que pour
    /// la division ; yroot avec droite = 0 donne gauche^Infinity, laissé à
    /// l'arithmétique f64.
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
        let v = match self {
            OpBinaire::Addition => gauche + droite,
            OpBinaire::Soustraction => gauche - droite,
            OpBinaire::Multiplication => gauche * droite,
            OpBinaire::Division => {
                if droite == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                gauche / droite
            }
            OpBinaire::Puissance => gauche.powf(droite),
            // racine y-ième : gauche^(1/droite)
            OpBinaire::RacineY => gauche.powf(1.0 / droite),
        };
        Ok(v)
    }
}
