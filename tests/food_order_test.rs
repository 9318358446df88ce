use ali_travel::app::catalog::{self, render_food_page, MenuPanel};
use ali_travel::app::landing::LandingPage;
use ali_travel::app::order::{submit_order, OrderForm};
use ali_travel::{AppConfig, Language, TravelError};

#[test]
fn test_browse_then_order_in_arabic() {
    let config = AppConfig::from_toml_str("[ui]\nlanguage = \"ar\"\n").unwrap();
    let language = config.ui.language;

    let landing = LandingPage::new(language, &config.ui.chat_url);
    assert_eq!(landing.order_label, "اطلب الطعام");

    let mut panel = MenuPanel::default();
    panel.toggle(3);
    let page = render_food_page(language, &panel);
    assert!(page.contains("المطاعم القريبة منك"));
    assert!(page.contains("- Rfissa"));

    let restaurant = catalog::find(3).unwrap();
    let notification = submit_order(
        restaurant,
        OrderForm {
            customer_name: "Hamza".to_string(),
            menu_item: "Rfissa".to_string(),
            notes: Some("بدون بصل".to_string()),
        },
        language,
    )
    .unwrap();

    assert_eq!(notification.restaurant, "Dar Tanjia");
    assert!(notification.message.contains("Dar Tanjia"));
}

#[test]
fn test_every_restaurant_accepts_its_own_menu() {
    for restaurant in catalog::restaurants() {
        for item in restaurant.menu {
            let form = OrderForm {
                customer_name: "Test".to_string(),
                menu_item: item.to_string(),
                notes: None,
            };
            assert!(submit_order(restaurant, form, Language::En).is_ok(), "{}", item);
        }
    }
}

#[test]
fn test_order_for_unknown_restaurant() {
    assert!(matches!(
        catalog::find(99),
        Err(TravelError::UnknownRestaurant { id: 99 })
    ));
}

#[test]
fn test_notification_serializes_for_logging() {
    let restaurant = catalog::find(2).unwrap();
    let notification = submit_order(
        restaurant,
        OrderForm {
            customer_name: "Youssef".to_string(),
            menu_item: "Fries".to_string(),
            notes: None,
        },
        Language::En,
    )
    .unwrap();

    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["restaurant"], "Snack Moul Lkaskrout");
    assert_eq!(json["menu_item"], "Fries");
    assert!(json["placed_at"].is_string());
}
