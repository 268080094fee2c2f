//! List request option tests

use cirrus_providers::elb::ListLoadBalancersOptions;
use cirrus_providers::options::{FormParameters, apply_form};
use cirrus_providers::rds::ListInstancesOptions;
use wiremock::matchers::{body_string, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::pairs;

#[test]
fn rds_marker_and_names() {
    let options = ListInstancesOptions::new()
        .after_marker("token-2")
        .with_names(["primary", "replica"]);
    assert_eq!(
        pairs(&options.form_parameters()),
        vec![
            ("Marker", "token-2"),
            ("InstanceNames.member.1", "primary"),
            ("InstanceNames.member.2", "replica"),
        ]
    );
}

#[test]
fn rds_builder_statics_match_chained_calls() {
    assert_eq!(
        ListInstancesOptions::after_marker_only("m"),
        ListInstancesOptions::new().after_marker("m")
    );
    assert_eq!(
        ListInstancesOptions::for_name("a"),
        ListInstancesOptions::new().with_name("a")
    );
    assert_eq!(
        ListInstancesOptions::for_names(["a", "b"]),
        ListInstancesOptions::new().with_name("a").with_name("b")
    );
}

#[test]
fn elb_uses_its_own_prefix() {
    let options = ListLoadBalancersOptions::for_name("web");
    assert_eq!(
        pairs(&options.form_parameters()),
        vec![("LoadBalancerNames.member.1", "web")]
    );
}

#[tokio::test]
async fn elb_form_reaches_server_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string(
            "Action=DescribeLoadBalancers&LoadBalancerNames.member.1=web&LoadBalancerNames.member.2=api",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListLoadBalancersOptions::new().with_names(["web", "api"]);
    let response = apply_form(
        reqwest::Client::new().post(server.uri()),
        "DescribeLoadBalancers",
        &options,
    )
    .send()
    .await
    .unwrap();

    assert_eq!(response.status(), 200);
}
