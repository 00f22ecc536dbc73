#![allow(missing_docs)]

pub(crate) mod api;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use api::{FakeTransactionApi, sample_response, transaction};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment, select_texts};
pub(crate) use http::{assert_content_type, get_header};
