//! Framework-light helpers shared by pages and components.

pub mod id;

#[cfg(test)]
pub(crate) mod test_html;
