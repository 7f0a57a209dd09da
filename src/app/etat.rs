//! src/app/etat.rs
//!
//! État UI : un tampon par session + ce qu’on affiche.
//!
//! Rôle : recevoir les touches (chiffres, '.', opérateurs, DEL, C, AC, =),
//! les transmettre au noyau, et déposer résultat / erreur / démarche.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `noyau::Tampon`.
//! - Une erreur n’efface jamais le tampon : l’utilisateur choisit (DEL, C, …).
//! - Garde-fou : bornes sur la lecture décimale (digits).

use log::warn;

use crate::noyau::format::{format_lecture, format_resultat};
use crate::noyau::jetons::est_operateur;
use crate::noyau::{Demarche, ErreurCalcul, Tampon};

/// Décimales de la lecture tronquée, par défaut.
pub const DIGITS_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus rien à dire.
pub const DIGITS_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie ---
    pub tampon: Tampon,

    // --- sorties ---
    pub resultat: String,    // forme compacte du dernier résultat
    pub lecture: String,     // lecture tronquée
    pub erreur: String,      // message d’erreur (si l’évaluation échoue)
    pub lecture_dispo: bool, // false si indéfini / infini / rien

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // Vrai juste après un "=" réussi : un chiffre recommence un calcul,
    // un opérateur enchaîne sur le résultat.
    pub resultat_frais: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            tampon: Tampon::new(),
            resultat: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            resultat_frais: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Chiffre, '.', ou opérateur. Le reste est ignoré (le clavier PC envoie de tout).
    pub fn touche(&mut self, jeton: &str) {
        let operande = jeton.len() == 1 && jeton.chars().all(|c| c.is_ascii_digit() || c == '.');
        let operateur = est_operateur(jeton);
        if !operande && !operateur {
            return;
        }

        if self.resultat_frais && operande {
            self.tampon.clear();
        }
        self.resultat_frais = false;
        self.erreur.clear();

        self.tampon.ajouter(jeton);
    }

    /// DEL : retire le dernier jeton du tampon.
    pub fn backspace(&mut self) {
        self.resultat_frais = false;
        match self.tampon.retirer_dernier() {
            Ok(_) => self.erreur.clear(),
            Err(e) => self.set_erreur(e),
        }
    }

    /// C : vide le tampon (sans toucher au dernier résultat affiché).
    pub fn clear_tampon(&mut self) {
        self.tampon.clear();
        self.erreur.clear();
        self.resultat_frais = false;
    }

    /// CLR : efface résultat + erreur + démarche (sans toucher au tampon).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche = Demarche::default();
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.clear_tampon();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
    }

    /// "=" : évalue via le noyau.
    pub fn egal(&mut self) {
        match self.tampon.evaluer() {
            Ok(x) => {
                let demarche = self.tampon.derniere_demarche().cloned().unwrap_or_default();
                self.set_resultat(x, demarche);
                self.resultat_frais = true;
            }
            Err(e) => {
                warn!("évaluation refusée ({}): {e}", self.tampon);
                self.set_erreur(e);
            }
        }
    }

    /* ------------------------ Dépôt des sorties ------------------------ */

    /// Choix UX : on CONSERVE le dernier résultat affiché sur une faute.
    pub fn set_erreur(&mut self, e: ErreurCalcul) {
        self.erreur = e.to_string();
        self.resultat_frais = false;
    }

    fn set_resultat(&mut self, x: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_resultat(x);
        self.demarche = demarche;
        self.maj_lecture(x);
    }

    fn maj_lecture(&mut self, x: f64) {
        match format_lecture(x, self.digits) {
            Some(v) => {
                self.lecture_dispo = true;
                self.lecture = v;
            }
            None => {
                self.lecture_dispo = false;
                self.lecture.clear();
            }
        }
    }

    /// Garde-fou : limite digits. Relit le résultat courant si le tampon n’a pas bougé.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        if !self.resultat_frais {
            return;
        }
        // Valeur relue d’abord : l’itérateur emprunte le tampon.
        let relu = self
            .tampon
            .jetons()
            .next()
            .and_then(|j| j.parse::<f64>().ok());
        if let Some(x) = relu {
            self.maj_lecture(x);
        }
    }
}
