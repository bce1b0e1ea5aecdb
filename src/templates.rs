//! Hand-authored report texts.
//!
//! [`fallback_content`] stands in for the AI-written body when none is
//! available; it goes through the same analysis and layout as any other
//! content. [`closing_letter`] is the text of the last page.

use crate::model::{CompanyInfo, ReportContext, SubjectProfile};

/// Personalised seven-section report body in markdown.
pub fn fallback_content(profile: &SubjectProfile, company: &CompanyInfo, date: &str) -> String {
    let name = &profile.name;
    let sector = &profile.sector;
    let position = &profile.position;
    let ambitions = &profile.ambitions;

    format!(
        "# {product} - {name}

## 1. RÉSUMÉ EXÉCUTIF

Bonjour {name}, votre profil révèle un potentiel remarquable dans le secteur {sector}. \
En tant que {position}, vous disposez d'atouts solides pour concrétiser vos ambitions : {ambitions}. \
Ce rapport identifie les opportunités clés et trace une feuille de route stratégique pour les 24 prochains mois.

## 2. ANALYSE PROFIL ACTUEL

**Forces identifiées :**
- Expertise technique dans le secteur {sector}
- Position stratégique en tant que {position}
- Vision claire avec des ambitions définies
- Capacité d'adaptation aux évolutions du marché

**Positionnement actuel :**
Votre rôle de {position} vous place au cœur des enjeux du secteur {sector}. \
Cette position vous offre une compréhension approfondie des défis et des opportunités sectorielles.

## 3. PRÉDICTIONS 2025-2027

**Tendances du secteur {sector} :**
- Digitalisation accélérée des processus
- Émergence de technologies de rupture
- Attentes clients orientées vers la personnalisation
- Importance croissante de la durabilité et de l'impact social

**Opportunités spécifiques :**
- Développement de compétences en intelligence artificielle
- Leadership dans la transformation digitale
- Innovation dans les pratiques durables
- Création de partenariats stratégiques

## 4. RECOMMANDATIONS STRATÉGIQUES

Pour atteindre vos ambitions \"{ambitions}\", nous recommandons :

**Formation continue :**
- Certification en technologies émergentes
- Développement des compétences en leadership
- Formation en gestion de projet agile

**Réseau professionnel :**
- Participation à des événements sectoriels
- Mentorat avec des leaders d'opinion
- Échanges réguliers avec vos pairs

**Innovation :**
- Lancement de projets pilotes
- Veille technologique active
- Expérimentation de nouvelles approches

## 5. OPPORTUNITÉS DE CROISSANCE

**Niches émergentes :**
- Intelligence artificielle appliquée au secteur {sector}
- Solutions durables et éco-responsables
- Expérience client personnalisée
- Automatisation intelligente des processus

**Partenariats potentiels :**
- Startups innovantes du secteur
- Institutions de recherche
- Entreprises complémentaires
- Organismes de formation spécialisés

## 6. PLAN D'ACTION

**6 premiers mois :**
- Audit complet de vos compétences actuelles
- Identification des formations prioritaires
- Développement de votre réseau professionnel
- Lancement d'un projet pilote

**6 à 12 mois :**
- Mise en œuvre des formations identifiées
- Consolidation des partenariats stratégiques
- Évaluation et optimisation du projet pilote
- Préparation de la phase d'expansion

**12 à 24 mois :**
- Déploiement à grande échelle des innovations
- Positionnement en tant qu'expert reconnu
- Exploration de nouveaux marchés
- Préparation de la prochaine étape de carrière

## 7. CONCLUSION

{name}, votre parcours dans le secteur {sector} vous a préparé(e) à saisir les opportunités qui s'offrent à vous. \
Vos ambitions \"{ambitions}\" sont réalisables et s'inscrivent dans les évolutions du marché.

L'avenir appartient aux professionnels capables d'anticiper les changements et de transformer les défis en opportunités. \
Avec une approche méthodique et les bonnes stratégies, vous avez tout pour devenir un acteur majeur de votre secteur.

**Votre succès commence aujourd'hui.**

---
*Rapport généré par {company} - Intelligence Artificielle*
*Pour {name} - {date}*",
        product = company.product_name.to_uppercase(),
        company = company.name,
    )
}

/// Closing letter addressed to the subject.
pub fn closing_letter(ctx: &ReportContext) -> String {
    let company = &ctx.company;
    format!(
        "Cher(e) {name},

Ce rapport d'analyse prédictive personnalisé vous offre une vision claire de votre potentiel \
professionnel et des opportunités qui s'offrent à vous dans le secteur {sector}.

Les recommandations présentées dans ce document reposent sur l'analyse de votre profil actuel \
et des tendances du marché pour la période 2025-2027.

PROCHAINES ÉTAPES RECOMMANDÉES :

1. Révision et intégration des recommandations stratégiques
2. Mise en place du plan d'action proposé
3. Suivi régulier des indicateurs de performance
4. Adaptation continue selon l'évolution du marché

Nous vous souhaitons plein succès dans la réalisation de vos ambitions professionnelles.

Pour toute question ou accompagnement personnalisé, n'hésitez pas à nous contacter :
E-mail : {email}
Site web : {website}
Téléphone : {phone}

Cordialement,
L'équipe {company}
{tagline}",
        name = ctx.profile.name,
        sector = ctx.profile.sector,
        email = company.email,
        website = company.website,
        phone = company.phone,
        company = company.name,
        tagline = company.tagline,
    )
}
