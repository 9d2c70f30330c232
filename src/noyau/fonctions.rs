// src/noyau/fonctions.rs
//
// Fonctions unaires du mode scientifique.
//
// Tout est f64, angles en radians. Les sorties hors domaine (ln(-1), 1/0,
// (-3)!) donnent NaN ou ±Infinity : le moteur les affiche telles quelles,
// il ne les traite pas comme des erreurs.

use std::f64::consts;

/// Au-delà, n! déborde f64 de toute façon (170! ≈ 7.3e306).
/// Garde-fou : évite aussi de boucler sur une saisie géante.
const FACTORIELLE_MAX: f64 = 170.0;

/// Une touche fonction du pavé scientifique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FonctionUnaire {
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log10,
    Carre,         // x²
    Cube,          // x³
    ExpE,          // e^x
    Exp10,         // 10^x
    Inverse,       // 1/x
    RacineCarree,  // √x
    RacineCubique, // ∛x
    Factorielle,   // x!
    Aleatoire,     // Rand
    Pi,            // π
    E,
    Negation, // +/-
}

impl FonctionUnaire {
    /// Vrai pour les touches qui ignorent la valeur courante (Rand, π, e).
    pub fn est_nullaire(self) -> bool {
        matches!(
            self,
            FonctionUnaire::Aleatoire | FonctionUnaire::Pi | FonctionUnaire::E
        )
    }

    /// Applique la fonction à la valeur courante.
    /// Les nullaires ignorent `x`.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            FonctionUnaire::Sin => x.sin(),
            FonctionUnaire::Cos => x.cos(),
            FonctionUnaire::Tan => x.tan(),
            FonctionUnaire::Sinh => x.sinh(),
            FonctionUnaire::Cosh => x.cosh(),
            FonctionUnaire::Tanh => x.tanh(),
            FonctionUnaire::Ln => x.ln(),
            FonctionUnaire::Log10 => x.log10(),
            FonctionUnaire::Carre => x * x,
            FonctionUnaire::Cube => x * x * x,
            FonctionUnaire::ExpE => x.exp(),
            FonctionUnaire::Exp10 => 10f64.powf(x),
            FonctionUnaire::Inverse => 1.0 / x,
            FonctionUnaire::RacineCarree => x.sqrt(),
            FonctionUnaire::RacineCubique => x.cbrt(),
            FonctionUnaire::Factorielle => factorielle(x),
            FonctionUnaire::Aleatoire => rand::random::<f64>(),
            FonctionUnaire::Pi => consts::PI,
            FonctionUnaire::E => consts::E,
            FonctionUnaire::Negation => -x,
        }
    }

    /// Étiquette de la touche (pavé scientifique).
    pub fn etiquette(self) -> &'static str {
        match self {
            FonctionUnaire::Sin => "sin",
            FonctionUnaire::Cos => "cos",
            FonctionUnaire::Tan => "tan",
            FonctionUnaire::Sinh => "sinh",
            FonctionUnaire::Cosh => "cosh",
            FonctionUnaire::Tanh => "tanh",
            FonctionUnaire::Ln => "ln",
            FonctionUnaire::Log10 => "log₁₀",
            FonctionUnaire::Carre => "x²",
            FonctionUnaire::Cube => "x³",
            FonctionUnaire::ExpE => "eˣ",
            FonctionUnaire::Exp10 => "10ˣ",
            FonctionUnaire::Inverse => "1/x",
            FonctionUnaire::RacineCarree => "√x",
            FonctionUnaire::RacineCubique => "∛x",
            FonctionUnaire::Factorielle => "x!",
            FonctionUnaire::Aleatoire => "Rand",
            FonctionUnaire::Pi => "π",
            FonctionUnaire::E => "e",
            FonctionUnaire::Negation => "+/-",
        }
    }
}

/// Factorielle sur f64.
///
/// - négatif ou non entier => NaN (choix documenté : même régime que les
///   autres sorties hors domaine)
/// - 0 => 1
/// - au-delà de FACTORIELLE_MAX => Infinity directement
fn factorielle(x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x > FACTORIELLE_MAX {
        return f64::INFINITY;
    }

    let n = x as u32;
    let mut produit = 1.0f64;
    for i in 2..=n {
        produit *= f64::from(i);
    }
    produit
}
