// src/noyau/moteur.rs
//
// Moteur accumulateur : toute la machine à états de la calculatrice.
//
// Contrats :
// - chaque événement est appliqué en entier, de façon synchrone, avant le
//   suivant (la boucle egui sérialise les entrées)
// - l'affichage contient au plus un point ; il se relit toujours en f64
//   (éventuellement NaN / ±Infinity après une sortie hors domaine) ou vaut "0"
// - un opérateur en attente porte TOUJOURS son opérande gauche : le couple
//   est un seul état (Attente), jamais deux champs séparément nullables
// - seul Division par zéro franchit la frontière en Err ; les opérandes
//   illisibles (NaN) donnent des no-ops silencieux, jamais de panique

use log::{debug, warn};

use super::fonctions::FonctionUnaire;
use super::format::{format_nombre, parse_nombre};
use super::historique::{Entree, Historique};
use super::ops::{ErreurCalcul, OpBinaire};

/// Pavés proposés par la vue. Purement présentation : aucun effet sur les
/// calculs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}

/// Touches mémoire (registre unique).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMemoire {
    Effacer,    // mc
    Ajouter,    // m+
    Retrancher, // m-
    Rappeler,   // mr
}

/// Contrat d'événements de la couche de présentation vers le moteur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evenement {
    Chiffre(char),
    Operateur(OpBinaire),
    Egal,
    Fonction(FonctionUnaire),
    Memoire(OpMemoire),
    Pourcentage,
    Effacer,   // AC
    Supprimer, // DEL
    BasculerHistorique,
    EffacerHistorique,
    ChoisirMode(Mode),
}

/// Opération binaire en attente, AVEC son opérande gauche.
///
/// L'opérande est conservé en numérique (capturé à la sélection de
/// l'opérateur) ; il repasse par le formateur pour l'affichage et
/// l'historique.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attente {
    Aucune,
    Operation { op: OpBinaire, gauche: f64 },
}

/// La machine à états. Possède tout l'état ; la vue n'en tient qu'une
/// projection en lecture seule, rafraîchie après chaque événement.
#[derive(Debug, Clone)]
pub struct Moteur {
    affichage: String,
    attente: Attente,
    // le prochain chiffre démarre une nouvelle saisie
    nouvelle_saisie: bool,
    // l'affichage a-t-il bougé depuis la sélection de l'opérateur ?
    // (distingue substitution d'opérateur et chaînage)
    operande_saisi: bool,
    memoire: f64,
    historique: Historique,
    historique_visible: bool,
    mode: Mode,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::nouveau()
    }
}

impl Moteur {
    pub fn nouveau() -> Self {
        Self {
            affichage: "0".to_string(),
            attente: Attente::Aucune,
            nouvelle_saisie: false,
            operande_saisi: false,
            memoire: 0.0,
            historique: Historique::nouveau(),
            historique_visible: false,
            mode: Mode::default(),
        }
    }

    /* ------------------------ Point d'entrée ------------------------ */

    /// Applique un événement. Seule la division par zéro remonte en Err ;
    /// le moteur s'est alors déjà remis à zéro (affichage "0", plus
    /// d'opération en attente, historique intact).
    pub fn appliquer(&mut self, evt: Evenement) -> Result<(), ErreurCalcul> {
        match evt {
            Evenement::Chiffre(c) => {
                self.saisir_chiffre(c);
                Ok(())
            }
            Evenement::Operateur(op) => self.choisir_operateur(op),
            Evenement::Egal => self.calculer(),
            Evenement::Fonction(f) => {
                self.appliquer_fonction(f);
                Ok(())
            }
            Evenement::Memoire(op) => {
                self.appliquer_memoire(op);
                Ok(())
            }
            Evenement::Pourcentage => {
                self.pourcentage();
                Ok(())
            }
            Evenement::Effacer => {
                self.tout_effacer();
                Ok(())
            }
            Evenement::Supprimer => {
                self.supprimer_chiffre();
                Ok(())
            }
            Evenement::BasculerHistorique => {
                self.historique_visible = !self.historique_visible;
                Ok(())
            }
            Evenement::EffacerHistorique => {
                self.historique.effacer();
                Ok(())
            }
            Evenement::ChoisirMode(mode) => {
                debug!("mode {mode:?}");
                self.mode = mode;
                Ok(())
            }
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre (ou le point) à la saisie courante.
    /// Tout autre caractère est ignoré.
    fn saisir_chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        // Point déjà présent : no-op, AVANT le test de nouvelle saisie
        // (ordre conservé de l'appli d'origine).
        if c == '.' && self.affichage.contains('.') {
            return;
        }

        if self.nouvelle_saisie || self.affichage == "0" {
            self.affichage = if c == '.' { "0.".to_string() } else { c.to_string() };
            self.nouvelle_saisie = false;
        } else {
            self.affichage.push(c);
        }
        self.operande_saisi = true;
    }

    /// DEL : retire le dernier caractère saisi.
    /// No-op quand l'écran est sur le point d'être remplacé.
    fn supprimer_chiffre(&mut self) {
        if self.nouvelle_saisie {
            return;
        }
        if self.affichage.chars().count() <= 1 {
            self.affichage = "0".to_string();
        } else {
            self.affichage.pop();
        }
    }

    /// AC : remise à zéro du calcul en cours.
    /// La mémoire et l'historique ne sont PAS touchés.
    fn tout_effacer(&mut self) {
        self.affichage = "0".to_string();
        self.attente = Attente::Aucune;
        self.nouvelle_saisie = false;
        self.operande_saisi = false;
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Sélectionne un opérateur binaire.
    ///
    /// - rien saisi depuis le dernier opérateur : simple substitution du
    ///   symbole, l'opérande gauche est conservé, aucun calcul
    /// - sinon, une opération déjà en attente est d'abord résolue
    ///   (chaînage : `3 + 4 ×` calcule 3+4=7 avant de retenir ×) ; une
    ///   division par zéro pendant ce chaînage abandonne la sélection,
    ///   l'état est déjà entièrement remis à zéro
    fn choisir_operateur(&mut self, op: OpBinaire) -> Result<(), ErreurCalcul> {
        // garde : ne devrait pas arriver, l'affichage vaut au moins "0"
        if self.affichage.is_empty() {
            return Ok(());
        }

        let en_attente = matches!(self.attente, Attente::Operation { .. });

        if en_attente && !self.operande_saisi {
            if let Attente::Operation { op: en_cours, .. } = &mut self.attente {
                *en_cours = op;
            }
            self.nouvelle_saisie = true;
            return Ok(());
        }

        if en_attente {
            self.calculer()?;
        }

        self.attente = Attente::Operation {
            op,
            gauche: parse_nombre(&self.affichage),
        };
        self.nouvelle_saisie = true;
        self.operande_saisi = false;
        Ok(())
    }

    /// Résout l'opération en attente ("=", ou chaînage).
    ///
    /// Sans opération en attente, ou avec un opérande illisible (NaN) :
    /// no-op silencieux, état conservé.
    fn calculer(&mut self) -> Result<(), ErreurCalcul> {
        let Attente::Operation { op, gauche } = self.attente else {
            return Ok(());
        };

        let droite = parse_nombre(&self.affichage);
        if gauche.is_nan() || droite.is_nan() {
            return Ok(());
        }

        let resultat = match op.appliquer(gauche, droite) {
            Ok(v) => v,
            Err(e) => {
                warn!("division par zéro : remise à zéro du calcul");
                self.tout_effacer();
                return Err(e);
            }
        };

        // Instantanés AVANT la réaffectation de l'affichage : l'opérande
        // droit enregistré est celui d'avant calcul, jamais le résultat.
        let entree = Entree {
            gauche: format_nombre(gauche),
            operateur: op.symbole(),
            droite: self.affichage.clone(),
            resultat: format_nombre(resultat),
        };

        self.affichage = format_nombre(resultat);
        self.historique.enregistrer(entree);
        self.attente = Attente::Aucune;
        self.nouvelle_saisie = true;
        self.operande_saisi = true;
        Ok(())
    }

    /* ------------------------ Fonctions / mémoire / pourcentage ------------------------ */

    /// Applique une fonction unaire à la valeur courante.
    /// Les nullaires (Rand, π, e) ignorent la valeur courante ; les autres
    /// font un no-op si elle est illisible (NaN).
    fn appliquer_fonction(&mut self, f: FonctionUnaire) {
        let courant = parse_nombre(&self.affichage);
        if courant.is_nan() && !f.est_nullaire() {
            return;
        }

        self.affichage = format_nombre(f.appliquer(courant));
        self.nouvelle_saisie = true;
        self.operande_saisi = true;
    }

    /// Registre mémoire unique : mc / m+ / m- / mr.
    fn appliquer_memoire(&mut self, op: OpMemoire) {
        match op {
            OpMemoire::Effacer => self.memoire = 0.0,
            OpMemoire::Ajouter => self.memoire += parse_nombre(&self.affichage),
            OpMemoire::Retrancher => self.memoire -= parse_nombre(&self.affichage),
            OpMemoire::Rappeler => {
                self.affichage = format_nombre(self.memoire);
                self.operande_saisi = true;
            }
        }
        self.nouvelle_saisie = true;
    }

    /// % : divise la valeur courante par 100.
    fn pourcentage(&mut self) {
        let courant = parse_nombre(&self.affichage);
        if courant.is_nan() {
            return;
        }
        self.affichage = format_nombre(courant / 100.0);
        self.nouvelle_saisie = true;
        self.operande_saisi = true;
    }

    /* ------------------------ Projection (lecture seule) ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Ligne d'attente au-dessus de l'affichage : "7 ×", ou None au repos.
    pub fn ligne_attente(&self) -> Option<String> {
        match self.attente {
            Attente::Aucune => None,
            Attente::Operation { op, gauche } => {
                Some(format!("{} {}", format_nombre(gauche), op.symbole()))
            }
        }
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn historique_visible(&self) -> bool {
        self.historique_visible
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
