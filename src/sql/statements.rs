pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
    CONSTRAINT products_pkey PRIMARY KEY (id)
)
"#;

/// `id` is SERIAL (int4); cast so rows decode into `i64` regardless of column width.
pub const SELECT_PRODUCT: &str =
    "SELECT id::int8 AS id, name, price FROM products WHERE id = $1";

/// $1 = limit, $2 = offset.
pub const SELECT_PRODUCTS: &str =
    "SELECT id::int8 AS id, name, price FROM products ORDER BY id ASC LIMIT $1 OFFSET $2";

pub const INSERT_PRODUCT: &str =
    "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id::int8 AS id, name, price";

/// $1 = name, $2 = price, $3 = id.
pub const UPDATE_PRODUCT: &str =
    "UPDATE products SET name = $1, price = $2 WHERE id = $3 RETURNING id::int8 AS id, name, price";

pub const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = $1";

pub const DELETE_ALL_PRODUCTS: &str = "DELETE FROM products";

pub const RESTART_PRODUCT_IDS: &str = "ALTER SEQUENCE products_id_seq RESTART WITH 1";

pub const PING: &str = "SELECT 1";
