use crate::app::i18n::{Language, FOOTER};
use crate::utils::error::{Result, TravelError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    pub menu: &'static [&'static str],
}

impl Restaurant {
    pub fn serves(&self, item: &str) -> bool {
        self.menu.contains(&item)
    }
}

static RESTAURANTS: [Restaurant; 4] = [
    Restaurant {
        id: 1,
        name: "Chez Lalla Zahra",
        location: "Marrakech, Bab Doukkala",
        distance: "2.5 km",
        menu: &["Tajine b l7out", "Harira", "Batbout b lkhodra"],
    },
    Restaurant {
        id: 2,
        name: "Snack Moul Lkaskrout",
        location: "Marrakech, Gueliz",
        distance: "3.2 km",
        menu: &["Tacos", "Sandwich", "Fries"],
    },
    Restaurant {
        id: 3,
        name: "Dar Tanjia",
        location: "Marrakech, Medina",
        distance: "1.8 km",
        menu: &["Couscous", "Tajine d l7out", "Rfissa"],
    },
    Restaurant {
        id: 4,
        name: "Café Safar",
        location: "Marrakech, Hivernage",
        distance: "4.1 km",
        menu: &["Qahwa", "Msemen", "Croissant"],
    },
];

pub fn restaurants() -> &'static [Restaurant] {
    &RESTAURANTS
}

pub fn find(id: u32) -> Result<&'static Restaurant> {
    RESTAURANTS
        .iter()
        .find(|r| r.id == id)
        .ok_or(TravelError::UnknownRestaurant { id })
}

/// Which restaurant card has its menu expanded. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuPanel {
    active: Option<u32>,
}

impl MenuPanel {
    pub fn toggle(&mut self, id: u32) {
        self.active = if self.active == Some(id) { None } else { Some(id) };
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.active == Some(id)
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }
}

/// Text rendering of the food page for the given panel state.
pub fn render_food_page(language: Language, panel: &MenuPanel) -> String {
    let text = language.food();
    let mut out = format!(
        "[{}] ali landing --lang {}\n\n{}\n{}\n",
        text.home, language, text.title, text.subtitle
    );

    for restaurant in restaurants() {
        let open = panel.is_open(restaurant.id);
        let action = if open { text.hide_menu } else { text.check_menu };
        out.push_str(&format!(
            "\n#{} {}\n   {}\n   {}\n   [{}]\n",
            restaurant.id, restaurant.name, restaurant.location, restaurant.distance, action
        ));

        if open {
            for item in restaurant.menu {
                out.push_str(&format!("     - {}\n", item));
            }
            // 訂單表單：姓名、品項、備註
            out.push_str(&format!(
                "\n     {} / {}\n     [{}] ali order --restaurant {} --name <..> --item <..>\n",
                text.name_placeholder, text.notes_placeholder, text.send_order, restaurant.id
            ));
        }
    }

    out.push_str(&format!("\n{}\n", FOOTER));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_restaurant() {
        assert_eq!(find(3).unwrap().name, "Dar Tanjia");
        assert!(matches!(
            find(42),
            Err(TravelError::UnknownRestaurant { id: 42 })
        ));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u32> = restaurants().iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), restaurants().len());
        assert!(restaurants().iter().all(|r| !r.menu.is_empty()));
    }

    #[test]
    fn test_menu_panel_keeps_one_open() {
        let mut panel = MenuPanel::default();
        panel.toggle(1);
        assert!(panel.is_open(1));

        panel.toggle(2);
        assert!(!panel.is_open(1));
        assert!(panel.is_open(2));

        panel.toggle(2);
        assert_eq!(panel.active(), None);
    }

    #[test]
    fn test_render_food_page_lists_open_menu_only() {
        let mut panel = MenuPanel::default();
        panel.toggle(2);
        let page = render_food_page(Language::En, &panel);

        assert!(page.contains("Restaurants Near You\n"));
        assert!(page.contains("- Tacos"));
        assert!(!page.contains("- Harira"));
        assert!(page.contains("[Hide Menu]"));
        assert!(page.contains("[Check Menu]"));
        assert!(page.starts_with("[Home] ali landing --lang en"));
        assert!(page.contains("Your Name… / Add notes / changes…"));
        assert!(page.contains("[Send Order] ali order --restaurant 2"));
        assert!(page.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_closed_panel_shows_no_order_form() {
        let page = render_food_page(Language::Fr, &MenuPanel::default());
        assert!(page.starts_with("[Accueil]"));
        assert!(!page.contains("Envoyer la commande"));
    }
}
