//! Noyau accumulateur
//!
//! Organisation interne :
//! - moteur.rs     : machine à états (saisie, chaînage, =, mémoire, historique)
//! - ops.rs        : opérateurs binaires + erreur de division par zéro
//! - fonctions.rs  : fonctions unaires scientifiques (trig, logs, x!, Rand…)
//! - historique.rs : file bornée des calculs aboutis (10 entrées)
//! - format.rs     : lecture / écriture des nombres affichés

pub mod fonctions;
pub mod format;
pub mod historique;
pub mod moteur;
pub mod ops;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use fonctions::FonctionUnaire;
pub use moteur::{Evenement, Mode, Moteur, OpMemoire};
pub use ops::{ErreurCalcul, OpBinaire};
