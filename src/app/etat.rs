//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur + ce qui n'appartient qu'à la présentation
//! (notification d'erreur, menu de mode déplié).
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par moteur.appliquer(...),
//!   la vue ne lit le moteur qu'en projection (lecture seule).
//! - La notification d'erreur est recouvrable : le prochain événement
//!   accepté l'efface. Ce n'est jamais un arrêt.

use crate::noyau::{Evenement, Moteur};

#[derive(Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // notification en cours ("Division par zéro impossible"), vide sinon
    pub erreur: String,

    // menu de choix de mode (Basique / Scientifique) déplié ?
    pub menu_visible: bool,
}

impl AppCalc {
    /// Fait suivre un événement au moteur et tient la notification à jour.
    pub fn envoyer(&mut self, evt: Evenement) {
        match self.moteur.appliquer(evt) {
            Ok(()) => self.erreur.clear(),
            Err(e) => self.erreur = e.to_string(),
        }
    }
}
