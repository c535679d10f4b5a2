use serde_json::{json, Value};
use zagros_menu::Catalog;

use crate::config::SiteConfig;
use crate::hours;

/// schema.org `Restaurant` document for the base layout.
pub fn restaurant_jsonld(site: &SiteConfig) -> Value {
    let opening_hours: Vec<Value> = hours::weekly_spec()
        .into_iter()
        .map(|(day, opens, closes)| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": day.to_string(),
                "opens": format!("{:02}:{:02}", opens.hour(), opens.minute()),
                "closes": format!("{:02}:{:02}", closes.hour(), closes.minute()),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Restaurant",
        "name": site.name,
        "url": site.base_url,
        "telephone": site.phone,
        "email": site.contact_address,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": site.street_address,
        },
        "servesCuisine": "Kurdish",
        "acceptsReservations": site.reservation_url,
        "openingHoursSpecification": opening_hours,
    })
}

/// schema.org `Menu` document for the menu page, in the display locale.
pub fn menu_jsonld(site: &SiteConfig, catalog: &Catalog, locale: &str) -> Value {
    let sections: Vec<Value> = catalog
        .categories
        .iter()
        .map(|category| {
            let items: Vec<Value> = catalog
                .items
                .iter()
                .filter(|item| item.category == category.id)
                .map(|item| {
                    json!({
                        "@type": "MenuItem",
                        "name": item.name.get(locale),
                        "description": item.description.get(locale),
                        "offers": {
                            "@type": "Offer",
                            "price": format!("{:.2}", item.price),
                            "priceCurrency": "EUR",
                        },
                        "suitableForDiet": diets(item),
                    })
                })
                .collect();

            json!({
                "@type": "MenuSection",
                "name": category.name.get(locale),
                "hasMenuItem": items,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Menu",
        "name": format!("{} Menu", site.name),
        "inLanguage": locale,
        "hasMenuSection": sections,
    })
}

fn diets(item: &zagros_menu::MenuItem) -> Vec<&'static str> {
    let mut diets = Vec::new();
    if item.vegan {
        diets.push("https://schema.org/VeganDiet");
    }
    if item.vegetarian {
        diets.push("https://schema.org/VegetarianDiet");
    }
    if item.halal {
        diets.push("https://schema.org/HalalDiet");
    }
    diets
}
