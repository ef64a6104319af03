//! Baseline seed data.

/// Email of the default admin account.
pub const ADMIN_EMAIL: &str = "admin@shop.com";
/// Name of the default admin account.
pub const ADMIN_NAME: &str = "Admin";
/// Initial password of the default admin account. Change it after seeding.
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct SeedCategory {
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub struct SeedProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: i64,
    pub category: &'static str,
    /// Unsplash photo ID.
    pub image_id: &'static str,
    pub stock: i64,
    pub featured: bool,
}

pub const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Electronics",
        slug: "electronics",
        image: "https://images.unsplash.com/photo-1605170876472-db58e15c430e?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Latest gadgets and tech",
    },
    SeedCategory {
        name: "Accessories",
        slug: "accessories",
        image: "https://images.unsplash.com/photo-1673997303871-178507ca875a?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Fashion accessories",
    },
    SeedCategory {
        name: "Kitchen",
        slug: "kitchen",
        image: "https://images.unsplash.com/photo-1556911220-bff31c812dba?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Kitchen essentials",
    },
    SeedCategory {
        name: "Furniture",
        slug: "furniture",
        image: "https://images.unsplash.com/photo-1723804685588-b8e95b2044f3?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Modern furniture",
    },
    SeedCategory {
        name: "Fashion",
        slug: "fashion",
        image: "https://images.unsplash.com/photo-1542755687-a33ff0c970ec?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Trendy clothing",
    },
    SeedCategory {
        name: "Others",
        slug: "others",
        image: "https://images.unsplash.com/photo-1550989460-0adf9ea622e2?crop=entropy&cs=srgb&fm=jpg&q=85",
        description: "Miscellaneous items",
    },
];

pub const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Wireless Headphones",
        description: "Premium noise-canceling headphones",
        price_cents: 19999,
        category: "electronics",
        image_id: "1505740420928-5e560c06d30e",
        stock: 50,
        featured: true,
    },
    SeedProduct {
        name: "Smart Watch",
        description: "Fitness tracking smartwatch",
        price_cents: 29999,
        category: "electronics",
        image_id: "1523275335684-37898b6baf30",
        stock: 30,
        featured: true,
    },
    SeedProduct {
        name: "Laptop Stand",
        description: "Ergonomic aluminum laptop stand",
        price_cents: 4999,
        category: "electronics",
        image_id: "1527864550417-7fd91fc51a46",
        stock: 100,
        featured: false,
    },
    SeedProduct {
        name: "Mechanical Keyboard",
        description: "RGB gaming keyboard",
        price_cents: 12999,
        category: "electronics",
        image_id: "1587829741301-dc798b83add3",
        stock: 45,
        featured: true,
    },
    SeedProduct {
        name: "Wireless Mouse",
        description: "Ergonomic wireless mouse",
        price_cents: 3999,
        category: "electronics",
        image_id: "1527814050087-3793815479db",
        stock: 80,
        featured: false,
    },
    SeedProduct {
        name: "Leather Wallet",
        description: "Genuine leather bifold wallet",
        price_cents: 5999,
        category: "accessories",
        image_id: "1627123424574-724758594e93",
        stock: 60,
        featured: true,
    },
    SeedProduct {
        name: "Sunglasses",
        description: "Classic aviator sunglasses",
        price_cents: 8999,
        category: "accessories",
        image_id: "1572635196237-14b3f281503f",
        stock: 70,
        featured: false,
    },
    SeedProduct {
        name: "Backpack",
        description: "Durable travel backpack",
        price_cents: 7999,
        category: "accessories",
        image_id: "1553062407-98eeb64c6a62",
        stock: 40,
        featured: true,
    },
    SeedProduct {
        name: "Coffee Maker",
        description: "Automatic drip coffee maker",
        price_cents: 14999,
        category: "kitchen",
        image_id: "1517668808822-9ebb02f2a0e6",
        stock: 25,
        featured: false,
    },
    SeedProduct {
        name: "Blender",
        description: "High-speed professional blender",
        price_cents: 9999,
        category: "kitchen",
        image_id: "1585515320310-259814833e62",
        stock: 35,
        featured: true,
    },
    SeedProduct {
        name: "Knife Set",
        description: "Professional chef knife set",
        price_cents: 15999,
        category: "kitchen",
        image_id: "1593618998160-e34014e67546",
        stock: 20,
        featured: false,
    },
    SeedProduct {
        name: "Office Chair",
        description: "Ergonomic mesh office chair",
        price_cents: 34999,
        category: "furniture",
        image_id: "1580480055273-228ff5388ef8",
        stock: 15,
        featured: true,
    },
    SeedProduct {
        name: "Standing Desk",
        description: "Adjustable height standing desk",
        price_cents: 49999,
        category: "furniture",
        image_id: "1595515106969-1ce29566ff1c",
        stock: 10,
        featured: true,
    },
    SeedProduct {
        name: "Bookshelf",
        description: "Modern 5-tier bookshelf",
        price_cents: 19999,
        category: "furniture",
        image_id: "1594620302200-9a762244a156",
        stock: 18,
        featured: false,
    },
    SeedProduct {
        name: "T-Shirt",
        description: "Cotton casual t-shirt",
        price_cents: 2999,
        category: "fashion",
        image_id: "1521572163474-6864f9cf17ab",
        stock: 100,
        featured: false,
    },
    SeedProduct {
        name: "Jeans",
        description: "Classic slim fit jeans",
        price_cents: 7999,
        category: "fashion",
        image_id: "1542272604-787c3835535d",
        stock: 90,
        featured: true,
    },
    SeedProduct {
        name: "Sneakers",
        description: "Comfortable running sneakers",
        price_cents: 11999,
        category: "fashion",
        image_id: "1460353581641-37baddab0fa2",
        stock: 50,
        featured: true,
    },
    SeedProduct {
        name: "Hoodie",
        description: "Warm pullover hoodie",
        price_cents: 6999,
        category: "fashion",
        image_id: "1556821840-3a63f95609a7",
        stock: 65,
        featured: false,
    },
    SeedProduct {
        name: "Phone Case",
        description: "Protective silicone phone case",
        price_cents: 1999,
        category: "others",
        image_id: "1601784551446-20c9e07cdbdb",
        stock: 150,
        featured: false,
    },
    SeedProduct {
        name: "Water Bottle",
        description: "Insulated stainless steel bottle",
        price_cents: 3499,
        category: "others",
        image_id: "1602143407151-7111542de6e8",
        stock: 120,
        featured: false,
    },
    SeedProduct {
        name: "Yoga Mat",
        description: "Non-slip exercise yoga mat",
        price_cents: 4499,
        category: "others",
        image_id: "1601925260368-ae2f83cf8b7f",
        stock: 75,
        featured: true,
    },
    SeedProduct {
        name: "Desk Lamp",
        description: "LED adjustable desk lamp",
        price_cents: 5499,
        category: "others",
        image_id: "1507473885765-e6ed057f782c",
        stock: 55,
        featured: false,
    },
    SeedProduct {
        name: "Power Bank",
        description: "20000mAh portable charger",
        price_cents: 4999,
        category: "electronics",
        image_id: "1609091839311-d5365f9ff1c5",
        stock: 85,
        featured: false,
    },
    SeedProduct {
        name: "USB-C Cable",
        description: "Fast charging USB-C cable",
        price_cents: 1499,
        category: "electronics",
        image_id: "1625948515291-69613efd103f",
        stock: 200,
        featured: false,
    },
    SeedProduct {
        name: "Webcam",
        description: "1080p HD streaming webcam",
        price_cents: 8999,
        category: "electronics",
        image_id: "1588508065123-287b28e013da",
        stock: 40,
        featured: true,
    },
    SeedProduct {
        name: "Microphone",
        description: "USB condenser microphone",
        price_cents: 12999,
        category: "electronics",
        image_id: "1590602847861-f357a9332bbc",
        stock: 30,
        featured: false,
    },
    SeedProduct {
        name: "Monitor",
        description: "27-inch 4K monitor",
        price_cents: 39999,
        category: "electronics",
        image_id: "1527443224154-c4a3942d3acf",
        stock: 20,
        featured: true,
    },
    SeedProduct {
        name: "Tablet",
        description: "10-inch Android tablet",
        price_cents: 29999,
        category: "electronics",
        image_id: "1561154464-82e9adf32764",
        stock: 25,
        featured: true,
    },
    SeedProduct {
        name: "Gaming Mouse Pad",
        description: "Extended RGB mouse pad",
        price_cents: 2999,
        category: "electronics",
        image_id: "1615663245857-ac93bb7c39e7",
        stock: 95,
        featured: false,
    },
    SeedProduct {
        name: "Speaker System",
        description: "2.1 desktop speaker system",
        price_cents: 14999,
        category: "electronics",
        image_id: "1608043152269-423dbba4e7e1",
        stock: 35,
        featured: false,
    },
];
