//! Client-side validation of the editing forms.
//!
//! Form structs hold the raw text of their inputs; the conversions into
//! request bodies are the only place that text is interpreted.

use thiserror::Error;

use crate::models::{Id, Product, ProductRequest, RegisterRequest, Role, Store, StoreRequest, User, UserUpdate};

/// A form value the server would reject, caught before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// Price is not a positive number.
    #[error("price must be a number greater than zero")]
    InvalidPrice,
    /// Discount is not a percentage.
    #[error("discount must be a number between 0 and 100")]
    InvalidDiscount,
    /// Quantity is not a non-negative integer.
    #[error("quantity must be a whole number of zero or more")]
    InvalidQuantity,
    /// Store id is not numeric.
    #[error("invalid store id")]
    InvalidStoreId,
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// A mandatory field, named by the payload, is blank.
    #[error("{0} is required")]
    Required(&'static str),
    /// Comment or tag text is blank.
    #[error("this field cannot be empty")]
    Blank,
}

/// Trimmed text, rejecting blank input.
///
/// # Errors
/// Returns [`FormError::Blank`] when nothing but whitespace was typed.
pub fn non_blank(text: &str) -> Result<String, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(FormError::Blank)
    } else {
        Ok(trimmed.to_string())
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    non_blank(value).map_err(|_| FormError::Required(field))
}

fn optional(text: &str) -> Option<&str> {
    Some(text.trim()).filter(|text| !text.is_empty())
}

/// Store ids arrive as route text.
///
/// # Errors
/// Returns [`FormError::InvalidStoreId`] for anything but an integer.
pub fn parse_store_id(raw: &str) -> Result<Id, FormError> {
    raw.trim().parse().map_err(|_| FormError::InvalidStoreId)
}

/// Create and edit form for products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price as typed; `,` or `.` as decimal separator.
    pub price: String,
    /// Stock as typed; blank for untracked.
    pub quantity: String,
    /// Discount percent as typed; blank for none.
    pub discount: String,
    /// Photo URL.
    pub image_url: String,
}

impl ProductForm {
    /// Prefill the edit form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.map(|q| q.to_string()).unwrap_or_default(),
            discount: product.discount.map(|d| d.to_string()).unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Validate the inputs.
    ///
    /// # Errors
    /// Returns the first invalid numeric field.
    pub fn to_request(&self) -> Result<ProductRequest, FormError> {
        let price = self
            .price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or(FormError::InvalidPrice)?;

        let discount = optional(&self.discount)
            .map(|raw| {
                raw.replace(',', ".")
                    .parse::<f64>()
                    .ok()
                    .filter(|discount| (0.0..=100.0).contains(discount))
                    .ok_or(FormError::InvalidDiscount)
            })
            .transpose()?;

        let quantity = optional(&self.quantity)
            .map(|raw| {
                raw.parse::<i64>()
                    .ok()
                    .filter(|quantity| *quantity >= 0)
                    .ok_or(FormError::InvalidQuantity)
            })
            .transpose()?;

        Ok(ProductRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
            discount,
            image_url: self.image_url.trim().to_string(),
        })
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Must equal `password`.
    pub confirm_password: String,
    /// National identity number.
    pub cpf: String,
    /// Optional phone.
    pub phone: String,
    /// Requested role.
    pub role: Role,
}

impl RegisterForm {
    /// # Errors
    /// Returns [`FormError::Required`] for the first blank mandatory field,
    /// then [`FormError::PasswordMismatch`].
    pub fn to_request(&self) -> Result<RegisterRequest, FormError> {
        let name = required("name", &self.name)?;
        let last_name = required("last name", &self.last_name)?;
        let email = required("email", &self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }
        let cpf = required("cpf", &self.cpf)?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            email,
            password: self.password.clone(),
            name,
            last_name,
            cpf,
            phone: self.phone.trim().to_string(),
            role: self.role,
        })
    }
}

/// Profile edit form, used both for "my profile" and the admin user editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// Phone.
    pub phone: String,
    /// National identity number.
    pub cpf: String,
    /// New password; blank keeps the current one.
    pub password: String,
    /// Must equal `password` when a password is typed.
    pub confirm_password: String,
    /// Only set by the admin editor.
    pub role: Option<Role>,
}

impl ProfileForm {
    /// Prefill from the user's own profile.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            cpf: user.cpf.clone(),
            ..Self::default()
        }
    }

    /// Prefill the admin editor, which also edits the role.
    #[must_use]
    pub fn for_admin(user: &User) -> Self {
        Self {
            role: Some(user.role.unwrap_or_default()),
            ..Self::from_user(user)
        }
    }

    /// # Errors
    /// Returns [`FormError::PasswordMismatch`] when a new password was typed
    /// and the confirmation differs.
    pub fn to_update(&self) -> Result<UserUpdate, FormError> {
        let password = if self.password.is_empty() {
            None
        } else if self.password == self.confirm_password {
            Some(self.password.clone())
        } else {
            return Err(FormError::PasswordMismatch);
        };
        Ok(UserUpdate {
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            role: self.role,
            password,
        })
    }
}

/// Store create and edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreForm {
    /// Store name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact line.
    pub contact: String,
    /// Cover image URL.
    pub image_url: String,
    /// Longer description.
    pub description: String,
}

impl From<&Store> for StoreForm {
    fn from(store: &Store) -> Self {
        let request = StoreRequest::from(store);
        Self {
            name: request.name,
            address: request.address,
            contact: request.contact,
            image_url: request.image_url,
            description: request.description,
        }
    }
}

impl From<&StoreForm> for StoreRequest {
    fn from(form: &StoreForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            contact: form.contact.trim().to_string(),
            image_url: form.image_url.trim().to_string(),
            description: form.description.trim().to_string(),
        }
    }
}
