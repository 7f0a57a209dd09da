// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé : une touche = un jeton envoyé au tampon
// - Clavier PC : chiffres/opérateurs tapés, Enter = "=", Backspace = DEL
// - Affichage : tampon courant, résultat, lecture tronquée, démarche
//
// Note :
// - Pas de TextEdit : le tampon EST l’entrée, on ne l’édite qu’à coups de jetons.

use eframe::egui;

use super::etat::{AppCalc, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier_pc(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice à tampon");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_actions(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    /// Touches du clavier physique. Enter/Backspace passent par key_pressed,
    /// le reste arrive en Event::Text (un ou plusieurs caractères).
    fn ui_clavier_pc(&mut self, ui: &mut egui::Ui) {
        let (textes, enter, backspace) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for t in textes {
            for c in t.chars() {
                if c == '=' {
                    self.egal();
                } else {
                    self.touche(&c.to_string());
                }
            }
        }
        if enter {
            self.egal();
        }
        if backspace {
            self.backspace();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Tampon ({} jetons) :", self.tampon.len()));
        let tampon = self.tampon.to_string();
        Self::champ_monospace(ui, "tampon_out", &tampon, 1);

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.label("Lecture :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat: C = tampon seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Vide le tampon", Action::ClearTampon);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tampon")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_jeton(ui, "7");
                self.bouton_jeton(ui, "8");
                self.bouton_jeton(ui, "9");
                self.bouton_action(ui, "DEL", "Retire le dernier jeton", Action::Backspace);
                ui.end_row();

                self.bouton_jeton(ui, "4");
                self.bouton_jeton(ui, "5");
                self.bouton_jeton(ui, "6");
                self.bouton_jeton(ui, "/");
                ui.end_row();

                self.bouton_jeton(ui, "1");
                self.bouton_jeton(ui, "2");
                self.bouton_jeton(ui, "3");
                self.bouton_jeton(ui, "*");
                ui.end_row();

                self.bouton_jeton(ui, "0");
                self.bouton_jeton(ui, ".");
                self.bouton_jeton(ui, "^");
                self.bouton_jeton(ui, "-");
                ui.end_row();

                ui.label("");
                ui.label("");
                self.bouton_action(ui, "=", "Évalue le tampon", Action::Egal);
                self.bouton_jeton(ui, "+");
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Après ^", "demarche_puissances", &self.demarche.puissances);
                Self::champ_demarche(ui, "Après * /", "demarche_produits", &self.demarche.produits);
                Self::champ_demarche(ui, "Après + -", "demarche_sommes", &self.demarche.sommes);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearTampon => self.clear_tampon(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace(),
                Action::Egal => self.egal(),
            }
        }
    }

    fn bouton_jeton(&mut self, ui: &mut egui::Ui, jeton: &str) {
        let resp = ui.add_sized([56.0, 30.0], egui::Button::new(jeton));
        if resp.clicked() {
            self.touche(jeton);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearTampon,
    ClearResultats,
    ResetTotal,
    Backspace,
    Egal,
}
