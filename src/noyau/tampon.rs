// src/noyau/tampon.rs
//
// Tampon d’expression : ce que la calculatrice a “en mémoire” entre deux touches.
//
// Contrats :
// - Les jetons sont rangés dans l’ordre de frappe (le plus récent à la fin).
// - Chiffres consécutifs => un seul opérande ("1","2" -> "12").
//   Le point décimal n’est pas un opérateur : il se fusionne pareil ("1",".","5" -> "1.5").
// - Aucune validation à l’insertion ; tout se décide à l’évaluation.
// - Une évaluation ratée laisse le tampon intact.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use super::erreur::{ErreurCalcul, Resultat};
use super::eval::{evaluer_jetons, Demarche};
use super::jetons::est_operateur;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tampon {
    jetons: VecDeque<String>,
    // trace du dernier "=" réussi
    demarche: Option<Demarche>,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un jeton (chiffre, '.', opérateur… ou n’importe quoi).
    pub fn ajouter(&mut self, jeton: impl Into<String>) {
        self.jetons.push_back(jeton.into());
        self.fusionner_chiffres();
    }

    /// Fusionne le jeton le plus récent avec ses voisins opérandes.
    /// S’arrête au premier opérateur : un opérateur n’est jamais fusionné.
    fn fusionner_chiffres(&mut self) {
        while self.jetons.len() > 1 {
            let n = self.jetons.len();
            if est_operateur(&self.jetons[n - 1]) || est_operateur(&self.jetons[n - 2]) {
                break;
            }

            // Les deux derniers sont des opérandes : l’ancien passe devant.
            let (Some(courant), Some(mut precedent)) =
                (self.jetons.pop_back(), self.jetons.pop_back())
            else {
                break;
            };
            precedent.push_str(&courant);
            trace!("fusion -> {precedent}");
            self.jetons.push_back(precedent);
        }
    }

    /// DEL : retire le dernier jeton (déjà fusionné) et le rend.
    pub fn retirer_dernier(&mut self) -> Resultat<String> {
        self.jetons.pop_back().ok_or(ErreurCalcul::TamponVide)
    }

    pub fn clear(&mut self) {
        self.jetons.clear();
        self.demarche = None;
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Lecture seule, dans l’ordre de frappe.
    pub fn jetons(&self) -> impl Iterator<Item = &str> + '_ {
        self.jetons.iter().map(String::as_str)
    }

    /// `=` : réduit le tampon à un seul jeton (le résultat) et le rend.
    /// La trace des trois passes reste lisible via `derniere_demarche`.
    pub fn evaluer(&mut self) -> Resultat<f64> {
        if self.is_empty() {
            return Err(ErreurCalcul::ExpressionVide);
        }

        let (x, demarche) = evaluer_jetons(self.jetons())?;

        // Succès seulement : on remplace tout par le résultat.
        // `{x}` se relit exactement (chaînage "= +3"), inf/NaN compris.
        self.jetons.clear();
        self.jetons.push_back(format!("{x}"));
        self.demarche = Some(demarche);
        debug!("résultat: {x}");

        Ok(x)
    }

    pub fn derniere_demarche(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }
}

impl fmt::Display for Tampon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, j) in self.jetons.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(j)?;
        }
        Ok(())
    }
}
