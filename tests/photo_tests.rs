// Host-side tests for curated-photo decoding.

use gallery_core::photo::{items_from_json, CuratedRequest};
use gallery_core::PhotoError;

const BODY: &str = r#"{
  "page": 1,
  "per_page": 3,
  "photos": [
    {
      "id": 101,
      "photographer": "Ada",
      "alt": "Harbour at dusk",
      "src": {
        "original": "https://img/101/original.jpg",
        "large2x": "https://img/101/large2x.jpg",
        "landscape": "https://img/101/landscape.jpg"
      }
    },
    { "id": 102, "src": { "original": "https://img/102/original.jpg" } },
    {
      "id": 103,
      "alt": "",
      "src": {
        "original": "https://img/103/original.jpg",
        "landscape": "https://img/103/landscape.jpg"
      }
    }
  ],
  "next_page": "https://api.pexels.com/v1/curated/?page=2&per_page=3"
}"#;

#[test]
fn decodes_records_with_landscape_urls() {
    let items = items_from_json(BODY).unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].index, 0);
    assert_eq!(items[0].image_url, "https://img/101/landscape.jpg");
    assert_eq!(items[0].full_url.as_deref(), Some("https://img/101/large2x.jpg"));
    assert_eq!(items[0].alt.as_deref(), Some("Harbour at dusk"));
    assert_eq!(items[0].photographer.as_deref(), Some("Ada"));

    assert_eq!(items[1].index, 1, "indices stay dense after a skipped record");
    assert_eq!(items[1].image_url, "https://img/103/landscape.jpg");
    assert_eq!(items[1].full_url.as_deref(), Some("https://img/103/original.jpg"));
    assert_eq!(items[1].alt, None);
}

#[test]
fn missing_photo_list_is_empty() {
    assert!(items_from_json("{}").unwrap().is_empty());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let err = items_from_json("<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, PhotoError::Decode(_)));
}

#[test]
fn curated_request_shape() {
    let req = CuratedRequest::new("secret", 50);
    assert_eq!(req.method(), "GET");
    assert_eq!(req.url, "https://api.pexels.com/v1/curated?per_page=50");
    assert_eq!(
        req.headers(),
        [("Accept", "application/json"), ("Authorization", "secret")]
    );
}
