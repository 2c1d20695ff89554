use crate::filters::TransactionType;
use crate::models::{Location, Property};
use chrono::{Duration, Utc};

fn location(city: &str, neighborhood: &str, latitude: f64, longitude: f64) -> Location {
    Location {
        city: city.to_string(),
        neighborhood: Some(neighborhood.to_string()),
        latitude: Some(latitude),
        longitude: Some(longitude),
    }
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Demo catalogue of commercial listings.
///
/// Rents are monthly amounts, sale prices are totals.
pub fn sample_listings() -> Vec<Property> {
    let now = Utc::now();

    vec![
        Property {
            id: "paris-bureaux-marais".to_string(),
            title: "Bureaux lumineux au cœur du Marais".to_string(),
            description: "Plateau de bureaux rénové, open space et trois salles de réunion.".to_string(),
            transaction_type: TransactionType::Sale,
            property_type: "office".to_string(),
            location: location("Paris", "Marais", 48.8590, 2.3620),
            price: 450_000.0,
            surface: 1_200.0,
            rooms: 4,
            parking: 1,
            year_built: Some(1998),
            features: features(&["Climatisation", "Fibre"]),
            verified: true,
            featured: false,
            views: 340,
            agent_id: "agent-durand".to_string(),
            created_at: now - Duration::days(3),
        },
        Property {
            id: "paris-commerce-bastille".to_string(),
            title: "Local commercial avec vitrine, Bastille".to_string(),
            description: "Boutique en pied d'immeuble sur rue passante, réserve au sous-sol.".to_string(),
            transaction_type: TransactionType::Rent,
            property_type: "retail".to_string(),
            location: location("Paris", "Bastille", 48.8530, 2.3690),
            price: 4_800.0,
            surface: 850.0,
            rooms: 2,
            parking: 0,
            year_built: Some(2005),
            features: features(&["Vitrine"]),
            verified: false,
            featured: true,
            views: 910,
            agent_id: "agent-durand".to_string(),
            created_at: now - Duration::days(10),
        },
        Property {
            id: "paris-plateau-la-defense".to_string(),
            title: "Plateau de bureaux à La Défense".to_string(),
            description: "Étage complet dans une tour récente, vue dégagée, restaurant d'entreprise.".to_string(),
            transaction_type: TransactionType::Sale,
            property_type: "office".to_string(),
            location: location("Paris", "La Défense", 48.8920, 2.2380),
            price: 2_350_000.0,
            surface: 6_400.0,
            rooms: 12,
            parking: 8,
            year_built: Some(2012),
            features: features(&["Parking", "Climatisation", "Fibre", "Accès PMR"]),
            verified: true,
            featured: true,
            views: 1_280,
            agent_id: "agent-moreau".to_string(),
            created_at: now - Duration::days(1),
        },
        Property {
            id: "lyon-entrepot-gerland".to_string(),
            title: "Entrepôt logistique à Gerland".to_string(),
            description: "Bâtiment de stockage avec quais, hauteur sous plafond de 9 m.".to_string(),
            transaction_type: TransactionType::Sale,
            property_type: "industrial".to_string(),
            location: location("Lyon", "Gerland", 45.7270, 4.8300),
            price: 780_000.0,
            surface: 15_000.0,
            rooms: 2,
            parking: 10,
            year_built: Some(1985),
            features: features(&["Parking", "Quai de chargement"]),
            verified: true,
            featured: false,
            views: 150,
            agent_id: "agent-moreau".to_string(),
            created_at: now - Duration::days(20),
        },
        Property {
            id: "lyon-bureaux-part-dieu".to_string(),
            title: "Bureaux cloisonnés Part-Dieu".to_string(),
            description: "Six bureaux fermés à deux pas de la gare, accueil partagé.".to_string(),
            transaction_type: TransactionType::Rent,
            property_type: "office".to_string(),
            location: location("Lyon", "Part-Dieu", 45.7600, 4.8590),
            price: 6_500.0,
            surface: 2_100.0,
            rooms: 6,
            parking: 3,
            year_built: Some(2016),
            features: features(&["Parking", "Climatisation"]),
            verified: false,
            featured: false,
            views: 520,
            agent_id: "agent-lefebvre".to_string(),
            created_at: now - Duration::days(5),
        },
        Property {
            id: "marseille-local-vieux-port".to_string(),
            title: "Local d'activité sur le Vieux-Port".to_string(),
            description: "Ancien restaurant avec terrasse, licence non incluse.".to_string(),
            transaction_type: TransactionType::Sale,
            property_type: "retail".to_string(),
            location: location("Marseille", "Vieux-Port", 43.2950, 5.3740),
            price: 320_000.0,
            surface: 700.0,
            rooms: 1,
            parking: 0,
            year_built: None,
            features: features(&["Vitrine", "Terrasse"]),
            verified: false,
            featured: false,
            views: 75,
            agent_id: "agent-lefebvre".to_string(),
            created_at: now - Duration::days(30),
        },
        Property {
            id: "bordeaux-coworking-chartrons".to_string(),
            title: "Espace de coworking aux Chartrons".to_string(),
            description: "Huit postes, cuisine équipée et salle de visio.".to_string(),
            transaction_type: TransactionType::Rent,
            property_type: "office".to_string(),
            location: location("Bordeaux", "Chartrons", 44.8560, -0.5700),
            price: 3_900.0,
            surface: 1_600.0,
            rooms: 8,
            parking: 2,
            year_built: Some(2019),
            features: features(&["Fibre", "Climatisation", "Cuisine équipée"]),
            verified: true,
            featured: true,
            views: 640,
            agent_id: "agent-durand".to_string(),
            created_at: now - Duration::days(7),
        },
        Property {
            id: "nantes-terrain-ile".to_string(),
            title: "Terrain constructible, Île de Nantes".to_string(),
            description: "Parcelle viabilisée en zone mixte, permis tertiaire possible.".to_string(),
            transaction_type: TransactionType::Sale,
            property_type: "land".to_string(),
            location: location("Nantes", "Île de Nantes", 47.2060, -1.5500),
            price: 1_100_000.0,
            surface: 43_000.0,
            rooms: 0,
            parking: 0,
            year_built: None,
            features: Vec::new(),
            verified: false,
            featured: false,
            views: 40,
            agent_id: "agent-moreau".to_string(),
            created_at: now - Duration::days(45),
        },
    ]
}
