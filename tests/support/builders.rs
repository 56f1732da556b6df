// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use kiosk_core::domain::{
    identity::UserId,
    market::{Region, Source},
    native_product::{NativePackage, NativeProduct},
    order::{Customer, LinkedItem, Order, OrderId},
    post::{Post, PostId},
    product::ProductId,
};
use uuid::Uuid;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub struct PostBuilder {
    like_count: i64,
    minutes: i64,
    author_id: UserId,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            like_count: 0,
            minutes: 0,
            author_id: UserId::generate(),
        }
    }

    pub fn likes(mut self, like_count: i64) -> Self {
        self.like_count = like_count;
        self
    }

    pub fn minutes_after_base(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId(Uuid::new_v4()),
            title: format!("post with {} likes", self.like_count),
            content: "body".into(),
            like_count: self.like_count,
            author_id: self.author_id,
            created_at: base_time() + Duration::minutes(self.minutes),
        }
    }
}

pub struct NativeProductBuilder {
    id: String,
    name: String,
    source: Source,
    region: Region,
    product_id: Option<ProductId>,
    minutes: i64,
    package_ids: Vec<String>,
}

impl NativeProductBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("{id} day tour"),
            id,
            source: Source::Kkday,
            region: Region::Jp,
            product_id: None,
            minutes: 0,
            package_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn linked_to(mut self, product_id: i64) -> Self {
        self.product_id = Some(ProductId(product_id));
        self
    }

    pub fn minutes_after_base(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn package(mut self, id: impl Into<String>) -> Self {
        self.package_ids.push(id.into());
        self
    }

    pub fn build(self) -> NativeProduct {
        let created_at = base_time() + Duration::minutes(self.minutes);
        NativeProduct {
            packages: self
                .package_ids
                .into_iter()
                .map(|id| NativePackage {
                    name: format!("{id} adult ticket"),
                    id,
                    source: self.source,
                    region: self.region,
                    package_id: None,
                    created_at,
                    updated_at: created_at,
                })
                .collect(),
            id: self.id,
            name: self.name,
            source: self.source,
            region: self.region,
            product_id: self.product_id,
            created_at,
            updated_at: created_at,
        }
    }
}

pub fn order(id: i64, region: Region) -> Order {
    Order {
        id: OrderId(id),
        status: "CONFIRMED".into(),
        quantity: 2,
        customer: Customer {
            name: "Mei Lin".into(),
            email: "mei@example.com".into(),
        },
        booked_at: base_time(),
        departure_at: base_time() + Duration::days(14),
        native_id: format!("KK-{id}"),
        product: LinkedItem::resolve(None, None, "Harbour cruise".into()),
        package: LinkedItem::resolve(Some(7), Some("Sunset seat".into()), "Seat A".into()),
        source: Source::Kkday,
        region,
        created_at: base_time(),
        updated_at: base_time(),
    }
}
