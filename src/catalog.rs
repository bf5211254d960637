//! Fixed seed data for the shopping catalog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub category_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductType {
    pub id: i64,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductOrder {
    pub id: i64,
    pub product_id: i64,
    pub user_name: &'static str,
    pub quantity: i64,
}

/// Status flag written for every seeded row ('0' = active).
pub const ACTIVE_STATUS: &str = "0";

pub const PRODUCT_TYPES: [ProductType; 4] = [
    ProductType { id: 1, name: "Điện tử" },
    ProductType { id: 2, name: "Thời trang" },
    ProductType { id: 3, name: "Gia dụng" },
    ProductType { id: 4, name: "Sách" },
];

pub const PRODUCTS: [ProductRecord; 10] = [
    ProductRecord {
        id: 1,
        name: "Laptop Dell XPS 15",
        description: "Laptop cao cấp với màn hình 15.6 inch 4K OLED, CPU Intel Core i7 thế hệ 13",
        category_id: 1,
    },
    ProductRecord {
        id: 2,
        name: "iPhone 15 Pro Max",
        description: "Smartphone flagship với chip A17 Pro, camera 48MP, màn hình ProMotion 120Hz",
        category_id: 1,
    },
    ProductRecord {
        id: 3,
        name: "Samsung Galaxy S24 Ultra",
        description: "Điện thoại Android cao cấp với bút S Pen, camera zoom 100x, màn hình Dynamic AMOLED",
        category_id: 1,
    },
    ProductRecord {
        id: 4,
        name: "Áo sơ mi nam",
        description: "Áo sơ mi công sở cao cấp, chất liệu cotton 100%, form slim fit",
        category_id: 2,
    },
    ProductRecord {
        id: 5,
        name: "Quần jean nữ",
        description: "Quần jean nữ skinny, co giãn 4 chiều, màu xanh nhạt",
        category_id: 2,
    },
    ProductRecord {
        id: 6,
        name: "Nồi cơm điện Philips",
        description: "Nồi cơm điện 1.8L, công nghệ nấu 3D, lòng nồi chống dính",
        category_id: 3,
    },
    ProductRecord {
        id: 7,
        name: "Máy hút bụi Dyson V15",
        description: "Máy hút bụi không dây, công suất hút mạnh, pin 60 phút",
        category_id: 3,
    },
    ProductRecord {
        id: 8,
        name: "Sách Đắc Nhân Tâm",
        description: "Sách kỹ năng sống bán chạy nhất mọi thời đại của Dale Carnegie",
        category_id: 4,
    },
    ProductRecord {
        id: 9,
        name: "Sách Clean Code",
        description: "Sách lập trình: A Handbook of Agile Software Craftsmanship by Robert C. Martin",
        category_id: 4,
    },
    ProductRecord {
        id: 10,
        name: "MacBook Pro M3",
        description: "Laptop Apple với chip M3 Pro, 16GB RAM, SSD 512GB, màn hình Liquid Retina XDR",
        category_id: 1,
    },
];

pub const ORDERS: [ProductOrder; 8] = [
    ProductOrder { id: 1, product_id: 1, user_name: "admin", quantity: 5 },
    ProductOrder { id: 2, product_id: 2, user_name: "user", quantity: 3 },
    ProductOrder { id: 3, product_id: 3, user_name: "admin", quantity: 2 },
    ProductOrder { id: 4, product_id: 4, user_name: "user", quantity: 10 },
    ProductOrder { id: 5, product_id: 5, user_name: "admin", quantity: 7 },
    ProductOrder { id: 6, product_id: 6, user_name: "user", quantity: 4 },
    ProductOrder { id: 7, product_id: 1, user_name: "user", quantity: 2 },
    ProductOrder { id: 8, product_id: 2, user_name: "admin", quantity: 1 },
];
