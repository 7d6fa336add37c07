//! Shared parameter infrastructure: the [`Paginate`] trait and [`PageParams`].

use serde::Serialize;

use crate::Error;

/// Largest `page[size]` the API accepts.
pub const MAX_PAGE_SIZE: i64 = 250;

/// The `page` object of a list request, sent as `page[number]` and `page[size]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Page number (1-indexed). `None` uses the API default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    /// Results per page. `None` uses the API default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl PageParams {
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.size.is_none()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(number) = self.number {
            if number < 1 {
                return Err(Error::Construction(format!(
                    "page number must be at least 1, got {}",
                    number
                )));
            }
        }
        if let Some(size) = self.size {
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                return Err(Error::Construction(format!(
                    "page size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, size
                )));
            }
        }
        Ok(())
    }
}

/// Implemented by list parameters. Provides the shared paging builder methods.
pub trait Paginate {
    /// Returns a mutable reference to the page fields.
    fn get_page(&mut self) -> &mut PageParams;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, number: i64) -> Self
    where
        Self: Sized,
    {
        self.get_page().number = Some(number);
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, size: i64) -> Self
    where
        Self: Sized,
    {
        self.get_page().size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds() {
        assert!(PageParams::default().validate().is_ok());
        assert!(PageParams {
            number: Some(1),
            size: Some(MAX_PAGE_SIZE)
        }
        .validate()
        .is_ok());
        assert!(PageParams {
            number: Some(0),
            size: None
        }
        .validate()
        .is_err());
        assert!(PageParams {
            number: None,
            size: Some(MAX_PAGE_SIZE + 1)
        }
        .validate()
        .is_err());
    }
}
