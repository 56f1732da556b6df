use crate::domain::errors::{DomainError, Entity};

const CNT_POST_LIKE: &str = "post_likes_pkey";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";
const CNT_PACKAGE_PRODUCT: &str = "packages_product_id_fkey";
const CNT_NATIVE_PRODUCT_PRODUCT: &str = "native_products_product_id_fkey";
const CNT_NATIVE_PACKAGE_PACKAGE: &str = "native_packages_package_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_LIKE => DomainError::PostAlreadyLiked,
                    CNT_COMMENT_POST => DomainError::NotFound(Entity::Post),
                    CNT_COMMENT_PARENT => DomainError::NotFound(Entity::Comment),
                    CNT_PACKAGE_PRODUCT | CNT_NATIVE_PRODUCT_PRODUCT => {
                        DomainError::NotFound(Entity::Product)
                    }
                    CNT_NATIVE_PACKAGE_PACKAGE => DomainError::NotFound(Entity::Package),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::persistence("unique constraint violated");
                    }
                    "23503" => {
                        return DomainError::persistence("referenced record not found");
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Text columns holding enum values go through `FromStr`; a bad value is a
/// storage fault, not caller input.
pub(super) fn parse_column<T>(column: &str, value: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr,
{
    value
        .parse()
        .map_err(|_| DomainError::Persistence(format!("unexpected {column} value: {value}")))
}
