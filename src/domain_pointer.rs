use crate::auth::Authed;
use crate::base::DirectAdminClient;
use crate::endpoints::Action;
use anyhow::Result;

impl DirectAdminClient<Authed> {
    /// Park `source_domain` on top of the active domain, as an alias when
    /// `alias` is true and as a pointer otherwise.
    ///
    /// The panel reports rejections (e.g. a pointer that already exists)
    /// inside an HTTP 200 page. This call treats any transport-successful
    /// response as success and hands back the body for callers that want to
    /// look closer.
    pub async fn add_domain_pointer(
        &self,
        source_domain: impl Into<String>,
        alias: bool,
    ) -> Result<String> {
        let fields = [
            ("domain".to_owned(), self.config.domain.clone()),
            ("action".to_owned(), "add".to_owned()),
            ("from".to_owned(), source_domain.into()),
            (
                "alias".to_owned(),
                if alias { "yes" } else { "no" }.to_owned(),
            ),
        ];
        self.send_form(&Action::DomainPointer.to_string(), &fields)
            .await
    }

    /// Delete one or more pointers, given as a comma-separated list of domain
    /// names. Success means the request went through, nothing more.
    pub async fn delete_domain_pointers(&self, domain_names: &str) -> Result<String> {
        let fields = pointer_delete_fields(&self.config.domain, domain_names);
        self.send_form(&Action::DomainPointer.to_string(), &fields)
            .await
    }
}

/// One indexed `select<N>` field per comma-separated name, trimmed, in input
/// order. An empty input still yields a single empty `select0`, mirroring the
/// panel form this mimics.
fn pointer_delete_fields(domain: &str, domain_names: &str) -> Vec<(String, String)> {
    let mut fields = vec![
        ("domain".to_owned(), domain.to_owned()),
        ("action".to_owned(), "delete".to_owned()),
        ("delete".to_owned(), "Delete".to_owned()),
    ];
    for (index, name) in domain_names.split(',').enumerate() {
        fields.push((format!("select{index}"), name.trim().to_owned()));
    }
    fields
}
