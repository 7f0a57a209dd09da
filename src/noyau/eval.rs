//! Noyau — évaluation en trois passes
//!
//! jetons -> termes -> passe ^ -> passe * / -> passe + - -> un seul nombre
//!
//! Chaque passe balaie la suite de gauche à droite et n’applique que les
//! opérateurs de son palier ; tout le reste est différé tel quel, dans l’ordre.
//! Conséquence assumée : `^` est associatif à GAUCHE (2^3^2 = 64).

use log::debug;

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{classer, format_termes, Palier, Terme};

/// Trace d’une évaluation (panneau “Démarche” + logs).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub puissances: String,
    pub produits: String,
    pub sommes: String,
}

/// Une passe : applique les opérateurs de `palier`, diffère le reste.
///
/// Le dernier terme différé est toujours le voisin de gauche de l’opérateur
/// courant ; le voisin de droite est le prochain terme du balayage.
pub fn passe(termes: Vec<Terme>, palier: Palier) -> Resultat<Vec<Terme>> {
    let mut differes: Vec<Terme> = Vec::with_capacity(termes.len());
    let mut suite = termes.into_iter();

    while let Some(terme) = suite.next() {
        match terme {
            Terme::Op(op) if op.palier() == palier => {
                let a = match differes.pop() {
                    Some(Terme::Nombre(a)) => a,
                    Some(Terme::Op(_)) => {
                        return Err(ErreurCalcul::ExpressionMalformee(
                            "deux opérateurs consécutifs",
                        ))
                    }
                    None => {
                        return Err(ErreurCalcul::ExpressionMalformee(
                            "opérateur sans opérande à gauche",
                        ))
                    }
                };
                let b = match suite.next() {
                    Some(Terme::Nombre(b)) => b,
                    Some(Terme::Op(_)) => {
                        return Err(ErreurCalcul::ExpressionMalformee(
                            "deux opérateurs consécutifs",
                        ))
                    }
                    None => {
                        return Err(ErreurCalcul::ExpressionMalformee(
                            "opérateur sans opérande à droite",
                        ))
                    }
                };
                differes.push(Terme::Nombre(op.appliquer(a, b)?));
            }
            autre => differes.push(autre),
        }
    }

    Ok(differes)
}

/// API du noyau : évalue une suite de jetons (déjà fusionnés).
///
/// Ne touche à rien : c’est le tampon qui décide quoi faire du résultat.
pub fn evaluer_jetons<'a, I>(jetons: I) -> Resultat<(f64, Demarche)>
where
    I: IntoIterator<Item = &'a str>,
{
    let bruts: Vec<&str> = jetons.into_iter().collect();
    if bruts.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut demarche = Demarche {
        jetons: bruts.join(" "),
        ..Default::default()
    };
    debug!("évaluation de: {}", demarche.jetons);

    // 1) Classement (les opérandes illisibles échouent ici)
    let mut courant = bruts
        .iter()
        .map(|j| classer(j))
        .collect::<Resultat<Vec<Terme>>>()?;

    // 2) Les trois passes, dans l’ordre des paliers
    for palier in Palier::TOUS {
        courant = passe(courant, palier)?;

        let txt = format_termes(&courant);
        debug!("après passe {palier:?}: {txt}");
        match palier {
            Palier::Puissance => demarche.puissances = txt,
            Palier::Produit => demarche.produits = txt,
            Palier::Somme => demarche.sommes = txt,
        }
    }

    // 3) Il doit rester exactement un nombre
    match courant.as_slice() {
        [Terme::Nombre(x)] => Ok((*x, demarche)),
        [Terme::Op(_)] => Err(ErreurCalcul::ExpressionMalformee("opérateur seul")),
        _ => Err(ErreurCalcul::ExpressionMalformee(
            "opérandes et opérateurs mal appariés",
        )),
    }
}
