use tierlist_core::{ColorPairGenerator, ImageRef, Item, ItemKind};
use uuid::Uuid;

#[test]
fn text_item_serializes_with_type_tag_and_colors() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let colors = ColorPairGenerator::default().pair_for_hue(0.0);
    let item = Item::text(id, "closure", colors);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["type"], "text");
    assert_eq!(json["title"], "closure");
    assert_eq!(json["colors"]["background"], "#ffe1ea");
    assert_eq!(json["colors"]["text"], "#803b53");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn image_item_has_no_text_fields() {
    let item = Item::image(Uuid::from_u128(3), ImageRef::new("blob:xyz"));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["type"], "image");
    assert_eq!(json["image"], "blob:xyz");
    assert!(json.get("title").is_none());
    assert!(json.get("colors").is_none());
}

#[test]
fn deserialize_rejects_malformed_text_color() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "type": "text",
        "title": "x",
        "colors": { "background": "white", "text": "#000000" }
    });
    let err = serde_json::from_value::<Item>(value).unwrap_err();
    assert!(err.to_string().contains("six hex digits"), "unexpected error: {err}");
}

#[test]
fn image_ref_debug_hides_payload() {
    let image = ImageRef::new("data:image/png;base64,SECRET");
    let debug = format!("{:?}", Item::image(Uuid::from_u128(1), image));
    assert!(!debug.contains("SECRET"));
    assert!(matches!(
        Item::image(Uuid::from_u128(1), ImageRef::new("a")).kind,
        ItemKind::Image { .. }
    ));
}
