// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier physique : chiffres, point, + - * /, Enter (=), Backspace (DEL),
//   Escape (AC), % — même plan de touches que l'appli d'origine
// - Tactile : gros boutons ; la vue n'interprète rien, elle ne fait que
//   traduire les clics en événements du moteur
//
// Note :
// - Pas de champ texte : tout le clavier passe par gerer_clavier(), appelé
//   une fois par frame depuis app.rs (aucun risque de double saisie).

use eframe::egui;

use crate::noyau::{Evenement, FonctionUnaire, Mode, OpBinaire, OpMemoire};

use super::etat::AppCalc;

// Tailles de touches (standard / scientifique)
const TOUCHE_STD: [f32; 2] = [72.0, 44.0];
const TOUCHE_SCI: [f32; 2] = [52.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(4.0);

                self.ui_ecran(ui);

                if self.menu_visible {
                    ui.add_space(4.0);
                    self.ui_menu_mode(ui);
                }

                ui.add_space(8.0);

                if self.moteur.historique_visible() {
                    // l'historique recouvre les pavés, comme la feuille
                    // coulissante de l'appli d'origine
                    self.ui_historique(ui);
                } else {
                    if self.moteur.mode() == Mode::Scientifique {
                        self.ui_pave_scientifique(ui);
                        ui.add_space(6.0);
                    }
                    self.ui_pave_standard(ui);
                }

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    /* ------------------------ Entête + écran ------------------------ */

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice Accu");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("☰").on_hover_text("Changer de mode").clicked() {
                    self.menu_visible = !self.menu_visible;
                }
                if ui.button("🕘").on_hover_text("Historique").clicked() {
                    self.envoyer(Evenement::BasculerHistorique);
                }
            });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d'attente ("7 ×"), ou ligne vide pour garder la hauteur
                    let attente = self.moteur.ligne_attente().unwrap_or_else(|| " ".into());
                    ui.label(egui::RichText::new(attente).monospace().weak());

                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_menu_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let basique = self.moteur.mode() == Mode::Basique;
            if ui.selectable_label(basique, "± ÷  Basique").clicked() {
                self.envoyer(Evenement::ChoisirMode(Mode::Basique));
                self.menu_visible = false;
            }
            if ui.selectable_label(!basique, "f(x)  Scientifique").clicked() {
                self.envoyer(Evenement::ChoisirMode(Mode::Scientifique));
                self.menu_visible = false;
            }
        });
    }

    /* ------------------------ Pavés ------------------------ */

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche_action(ui, "DEL", "Efface le dernier chiffre", Evenement::Supprimer);
                self.touche_action(ui, "AC", "Remise à zéro du calcul", Evenement::Effacer);
                self.touche_action(ui, "%", "Divise par 100", Evenement::Pourcentage);
                self.touche_operateur(ui, "÷", OpBinaire::Division);
                ui.end_row();

                self.touche_chiffre(ui, '7');
                self.touche_chiffre(ui, '8');
                self.touche_chiffre(ui, '9');
                self.touche_operateur(ui, "×", OpBinaire::Multiplication);
                ui.end_row();

                self.touche_chiffre(ui, '4');
                self.touche_chiffre(ui, '5');
                self.touche_chiffre(ui, '6');
                self.touche_operateur(ui, "−", OpBinaire::Soustraction);
                ui.end_row();

                self.touche_chiffre(ui, '1');
                self.touche_chiffre(ui, '2');
                self.touche_chiffre(ui, '3');
                self.touche_operateur(ui, "+", OpBinaire::Addition);
                ui.end_row();

                self.touche_fonction_std(ui, FonctionUnaire::Negation);
                self.touche_chiffre(ui, '0');
                self.touche_chiffre(ui, '.');
                self.touche_action(ui, "=", "Calcule", Evenement::Egal);
                ui.end_row();
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        use FonctionUnaire as F;

        egui::Grid::new("pave_scientifique")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // touches sans effet dans l'appli d'origine : rendues inertes
                self.touche_inerte(ui, "(");
                self.touche_inerte(ui, ")");
                self.touche_memoire(ui, "mc", OpMemoire::Effacer);
                self.touche_memoire(ui, "m+", OpMemoire::Ajouter);
                self.touche_memoire(ui, "m-", OpMemoire::Retrancher);
                self.touche_memoire(ui, "mr", OpMemoire::Rappeler);
                ui.end_row();

                self.touche_inerte(ui, "2nd");
                self.touche_fonction(ui, F::Carre);
                self.touche_fonction(ui, F::Cube);
                self.touche_operateur_sci(ui, "xʸ", OpBinaire::Puissance);
                self.touche_fonction(ui, F::ExpE);
                self.touche_fonction(ui, F::Exp10);
                ui.end_row();

                self.touche_fonction(ui, F::Inverse);
                self.touche_fonction(ui, F::RacineCarree);
                self.touche_fonction(ui, F::RacineCubique);
                self.touche_operateur_sci(ui, "ʸ√x", OpBinaire::RacineY);
                self.touche_fonction(ui, F::Ln);
                self.touche_fonction(ui, F::Log10);
                ui.end_row();

                self.touche_fonction(ui, F::Factorielle);
                self.touche_fonction(ui, F::Sin);
                self.touche_fonction(ui, F::Cos);
                self.touche_fonction(ui, F::Tan);
                self.touche_fonction(ui, F::E);
                self.touche_inerte(ui, "EE");
                ui.end_row();

                self.touche_fonction(ui, F::Aleatoire);
                self.touche_fonction(ui, F::Sinh);
                self.touche_fonction(ui, F::Cosh);
                self.touche_fonction(ui, F::Tanh);
                self.touche_fonction(ui, F::Pi);
                self.touche_inerte(ui, "Rad");
                ui.end_row();
            });
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Récents ({})", self.moteur.historique().len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Fermer").clicked() {
                    self.envoyer(Evenement::BasculerHistorique);
                }
                if ui.button("Effacer").clicked() {
                    self.envoyer(Evenement::EffacerHistorique);
                }
            });
        });
        ui.separator();

        if self.moteur.historique().est_vide() {
            ui.weak("Aucun historique");
            return;
        }

        for entree in self.moteur.historique().iter() {
            ui.horizontal(|ui| {
                ui.monospace(entree.calcul());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(egui::RichText::new(&entree.resultat).strong());
                });
            });
        }
    }

    /* ------------------------ Touches ------------------------ */

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        if ui
            .add_sized(TOUCHE_STD, egui::Button::new(c.to_string()))
            .clicked()
        {
            self.envoyer(Evenement::Chiffre(c));
        }
    }

    fn touche_operateur(&mut self, ui: &mut egui::Ui, label: &str, op: OpBinaire) {
        if ui.add_sized(TOUCHE_STD, egui::Button::new(label)).clicked() {
            self.envoyer(Evenement::Operateur(op));
        }
    }

    fn touche_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, evt: Evenement) {
        let resp = ui
            .add_sized(TOUCHE_STD, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.envoyer(evt);
        }
    }

    fn touche_fonction_std(&mut self, ui: &mut egui::Ui, f: FonctionUnaire) {
        if ui
            .add_sized(TOUCHE_STD, egui::Button::new(f.etiquette()))
            .clicked()
        {
            self.envoyer(Evenement::Fonction(f));
        }
    }

    fn touche_fonction(&mut self, ui: &mut egui::Ui, f: FonctionUnaire) {
        if ui
            .add_sized(TOUCHE_SCI, egui::Button::new(f.etiquette()))
            .clicked()
        {
            self.envoyer(Evenement::Fonction(f));
        }
    }

    fn touche_operateur_sci(&mut self, ui: &mut egui::Ui, label: &str, op: OpBinaire) {
        if ui.add_sized(TOUCHE_SCI, egui::Button::new(label)).clicked() {
            self.envoyer(Evenement::Operateur(op));
        }
    }

    fn touche_memoire(&mut self, ui: &mut egui::Ui, label: &str, op: OpMemoire) {
        if ui.add_sized(TOUCHE_SCI, egui::Button::new(label)).clicked() {
            self.envoyer(Evenement::Memoire(op));
        }
    }

    fn touche_inerte(&mut self, ui: &mut egui::Ui, label: &str) {
        ui.add_enabled(false, egui::Button::new(label).min_size(TOUCHE_SCI.into()));
    }

    /* ------------------------ Clavier ------------------------ */

    /// Clavier physique, appelé une fois par frame.
    pub fn gerer_clavier(&mut self, ctx: &egui::Context) {
        let mut evts: Vec<Evenement> = Vec::new();

        ctx.input(|i| {
            for e in &i.events {
                match e {
                    egui::Event::Text(texte) => {
                        for c in texte.chars() {
                            if let Some(evt) = evenement_du_caractere(c) {
                                evts.push(evt);
                            }
                        }
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => evts.push(Evenement::Egal),
                        egui::Key::Backspace => evts.push(Evenement::Supprimer),
                        egui::Key::Escape => evts.push(Evenement::Effacer),
                        _ => {}
                    },
                    _ => {}
                }
            }
        });

        for evt in evts {
            self.envoyer(evt);
        }
    }
}

/// Parité clavier avec l'appli d'origine : chiffres, point, `+ - * /`,
/// `=` et `%`. Enter/Backspace/Escape arrivent en touches, pas en texte.
fn evenement_du_caractere(c: char) -> Option<Evenement> {
    match c {
        '0'..='9' | '.' => Some(Evenement::Chiffre(c)),
        '+' => Some(Evenement::Operateur(OpBinaire::Addition)),
        '-' => Some(Evenement::Operateur(OpBinaire::Soustraction)),
        '*' => Some(Evenement::Operateur(OpBinaire::Multiplication)),
        '/' => Some(Evenement::Operateur(OpBinaire::Division)),
        '=' => Some(Evenement::Egal),
        '%' => Some(Evenement::Pourcentage),
        _ => None,
    }
}
