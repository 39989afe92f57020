use std::fs;

use deals_core::{record, ListingStore, StoreError};
use deals_domain::{BrandDealForm, BrandProfile, DiscountDealForm, ListingRecord};
use deals_storage_json::JsonListingStore;
use tempfile::tempdir;

fn brand_listing(title: &str) -> ListingRecord {
    let form = BrandDealForm {
        title: title.to_string(),
        hashtags: "launch".to_string(),
        ..BrandDealForm::default()
    };
    ListingRecord::BrandDeal(record::brand_deal_record(
        &form,
        &BrandProfile::new("Acme", "https://cdn.example/acme.png"),
    ))
}

#[tokio::test]
async fn appends_listings_in_order() {
    let dir = tempdir().expect("tempdir");
    let store = JsonListingStore::new(dir.path().join("data")).expect("create store");

    let first = store
        .submit_listing(brand_listing("First"))
        .await
        .expect("first write");
    let discount = DiscountDealForm {
        title: "Spring sale".to_string(),
        ..DiscountDealForm::default()
    };
    let second = store
        .submit_listing(ListingRecord::DiscountDeal(record::discount_deal_record(
            &discount,
            &BrandProfile::default(),
        )))
        .await
        .expect("second write");

    let entries = store.list().expect("list listings");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, first);
    assert_eq!(entries[0].listing.title(), "First");
    assert_eq!(entries[1].id, second);
    assert_eq!(entries[1].listing.kind(), "discount_deal");
    assert!(store.path().exists());
    assert!(!dir.path().join("data").join("listings.json.tmp").exists());
}

#[tokio::test]
async fn persisted_shape_uses_store_field_names() {
    let dir = tempdir().expect("tempdir");
    let store = JsonListingStore::new(dir.path().to_path_buf()).expect("create store");
    store
        .submit_listing(brand_listing("Shape"))
        .await
        .expect("write");

    let raw = fs::read_to_string(store.path()).expect("read file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse");
    let record = &value[0]["listing"]["record"];
    assert_eq!(value[0]["listing"]["kind"], "brand_deal");
    assert_eq!(record["brand_name"], "Acme");
    assert_eq!(record["hashtags"][0], "#launch");
    assert_eq!(record["status"], "Active");
    assert!(record.get("category").is_some());
}

#[tokio::test]
async fn corrupt_file_is_reported_not_overwritten() {
    let dir = tempdir().expect("tempdir");
    let store = JsonListingStore::new(dir.path().to_path_buf()).expect("create store");
    fs::write(store.path(), "[ broken").expect("seed corrupt file");

    let err = store
        .submit_listing(brand_listing("Lost"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Serialization(_)));
    assert_eq!(fs::read_to_string(store.path()).expect("read"), "[ broken");
}
