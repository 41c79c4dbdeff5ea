//! MCP dispatch tests: method routing, error-code mapping and domain outcomes.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use clientele_mcp::McpHandler;
use clientele_protocol::mcp::methods;
use clientele_protocol::{error_codes, RequestId};
use clientele_registry::{CustomerQuery, CustomerRepository, RepositoryError};
use clientele_types::{
    Customer, CustomerId, CustomerPatch, CustomerStats, CustomerStatus, NewCustomer,
};

use common::{call, make_handler, payload, rpc};

#[tokio::test]
async fn initialize_returns_server_metadata() {
    let handler = make_handler();
    let output = handler.dispatch(&rpc(methods::INITIALIZE, 1, None)).await;
    let result = output.result().expect("success");
    assert_eq!(result["serverInfo"]["name"], "customer-management-server");
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn initialize_ignores_client_params() {
    let handler = make_handler();
    let req = rpc(methods::INITIALIZE, 2, Some(json!({"protocolVersion": 123})));
    assert!(handler.dispatch(&req).await.result().is_some());
}

#[tokio::test]
async fn response_echoes_string_id() {
    let handler = make_handler();
    let mut req = rpc(methods::TOOLS_LIST, 0, None);
    req.id = RequestId::String("req-7".into());
    let json_str = handler.dispatch(&req).await.to_json().expect("ser");
    let parsed: Value = serde_json::from_str(&json_str).expect("de");
    assert_eq!(parsed["id"], "req-7");
    assert_eq!(parsed["jsonrpc"], "2.0");
}

#[tokio::test]
async fn tools_list_returns_six_tools_with_schemas() {
    let handler = make_handler();
    let output = handler.dispatch(&rpc(methods::TOOLS_LIST, 3, None)).await;
    let tools = output.result().expect("success")["tools"]
        .as_array()
        .expect("tools array")
        .clone();
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(
        names,
        [
            "get_customer",
            "list_customers",
            "add_customer",
            "update_customer",
            "disable_customer",
            "activate_customer"
        ]
    );
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let handler = make_handler();
    let output = handler.dispatch(&rpc("resources/list", 4, None)).await;
    assert_eq!(output.error_code(), Some(error_codes::METHOD_NOT_FOUND));
}

#[tokio::test]
async fn unknown_tool_is_method_not_found() {
    let handler = make_handler();
    let output = handler
        .dispatch(&call(5, "delete_customer", json!({"customer_id": 1})))
        .await;
    assert_eq!(output.error_code(), Some(-32601));
}

#[tokio::test]
async fn tools_call_missing_params_is_invalid_params() {
    let handler = make_handler();
    let output = handler.dispatch(&rpc(methods::TOOLS_CALL, 6, None)).await;
    assert_eq!(output.error_code(), Some(error_codes::INVALID_PARAMS));

    let output = handler
        .dispatch(&rpc(methods::TOOLS_CALL, 7, Some(json!({"arguments": {}}))))
        .await;
    assert_eq!(output.error_code(), Some(error_codes::INVALID_PARAMS));
}

#[tokio::test]
async fn argument_shape_mismatches_are_invalid_params() {
    let handler = make_handler();
    let cases = [
        call(8, "get_customer", json!({})),
        call(9, "get_customer", json!({"customer_id": "1"})),
        call(10, "get_customer", json!({"customer_id": 1, "extra": 1})),
        call(11, "add_customer", json!({"email": "a@b.c"})),
        call(12, "list_customers", json!(["active"])),
    ];
    for req in &cases {
        let output = handler.dispatch(req).await;
        assert_eq!(output.error_code(), Some(-32602), "{:?}", req.params);
    }
}

#[tokio::test]
async fn absent_arguments_mean_empty_mapping() {
    let handler = make_handler();
    let req = rpc(
        methods::TOOLS_CALL,
        13,
        Some(json!({"name": "list_customers"})),
    );
    let p = payload(&handler.dispatch(&req).await);
    assert_eq!(p["success"], true);
    assert_eq!(p["count"], 0);
}

#[tokio::test]
async fn unknown_id_is_domain_failure_not_protocol_error() {
    let handler = make_handler();
    let output = handler
        .dispatch(&call(14, "get_customer", json!({"customer_id": 999_999})))
        .await;
    assert!(output.error_code().is_none());
    assert_eq!(output.result().expect("result")["isError"], true);
    let p = payload(&output);
    assert_eq!(p["success"], false);
    assert_eq!(p["error"], "Customer with ID 999999 not found");
}

#[tokio::test]
async fn blank_names_fail_validation() {
    let handler = make_handler();
    for name in ["", "   "] {
        let output = handler
            .dispatch(&call(15, "add_customer", json!({"name": name})))
            .await;
        let p = payload(&output);
        assert_eq!(p["success"], false);
        assert_eq!(p["error"], "Customer name is required");
    }
    let ok = handler
        .dispatch(&call(16, "add_customer", json!({"name": "X"})))
        .await;
    assert_eq!(payload(&ok)["success"], true);
}

#[tokio::test]
async fn invalid_status_filter_is_domain_failure() {
    let handler = make_handler();
    let output = handler
        .dispatch(&call(17, "list_customers", json!({"status": "archived"})))
        .await;
    assert!(output.error_code().is_none());
    assert_eq!(payload(&output)["success"], false);
}

#[tokio::test]
async fn update_without_fields_is_domain_failure() {
    let handler = make_handler();
    handler
        .dispatch(&call(18, "add_customer", json!({"name": "A"})))
        .await;
    let output = handler
        .dispatch(&call(19, "update_customer", json!({"customer_id": 1})))
        .await;
    let p = payload(&output);
    assert_eq!(p["success"], false);
    assert_eq!(p["error"], "No fields to update");
}

#[tokio::test]
async fn update_changes_supplied_fields() {
    let handler = make_handler();
    handler
        .dispatch(&call(20, "add_customer", json!({"name": "A", "phone": "1"})))
        .await;
    let output = handler
        .dispatch(&call(
            21,
            "update_customer",
            json!({"customer_id": 1, "name": "Alex", "email": "alex@example.com"}),
        ))
        .await;
    let p = payload(&output);
    assert_eq!(p["success"], true);
    assert_eq!(p["message"], "Customer 1 updated successfully");
    assert_eq!(p["customer"]["name"], "Alex");
    assert_eq!(p["customer"]["email"], "alex@example.com");
    assert_eq!(p["customer"]["phone"], "1");
}

#[tokio::test]
async fn scenario_add_disable_and_filter() {
    let handler = make_handler();

    assert!(handler
        .dispatch(&rpc(methods::INITIALIZE, 1, None))
        .await
        .result()
        .is_some());
    let listed = handler.dispatch(&rpc(methods::TOOLS_LIST, 2, None)).await;
    assert_eq!(
        listed.result().expect("tools")["tools"]
            .as_array()
            .expect("arr")
            .len(),
        6
    );

    for name in ["Alice Johnson", "Bob Smith"] {
        handler
            .dispatch(&call(3, "add_customer", json!({"name": name})))
            .await;
    }
    let all = payload(&handler.dispatch(&call(4, "list_customers", json!({}))).await);
    let max_id = all["customers"]
        .as_array()
        .expect("arr")
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .max()
        .expect("some customers");

    let added = payload(
        &handler
            .dispatch(&call(5, "add_customer", json!({"name": "Zoe Park"})))
            .await,
    );
    let zoe_id = added["customer"]["id"].as_i64().expect("id");
    assert_eq!(zoe_id, max_id + 1);
    assert_eq!(added["customer"]["status"], "active");

    let disabled = payload(
        &handler
            .dispatch(&call(6, "disable_customer", json!({"customer_id": zoe_id})))
            .await,
    );
    assert_eq!(disabled["customer"]["status"], "disabled");

    let ids = |v: &Value| -> Vec<i64> {
        v["customers"]
            .as_array()
            .expect("arr")
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect()
    };
    let disabled_list = payload(
        &handler
            .dispatch(&call(7, "list_customers", json!({"status": "disabled"})))
            .await,
    );
    assert!(ids(&disabled_list).contains(&zoe_id));
    let active_list = payload(
        &handler
            .dispatch(&call(8, "list_customers", json!({"status": "active"})))
            .await,
    );
    assert!(!ids(&active_list).contains(&zoe_id));

    let reactivated = payload(
        &handler
            .dispatch(&call(9, "activate_customer", json!({"customer_id": zoe_id})))
            .await,
    );
    assert_eq!(reactivated["message"], format!("Customer {zoe_id} has been activated"));
}

/// A store whose every call fails with an unexpected storage fault.
struct BrokenRepository;

fn broken() -> RepositoryError {
    RepositoryError::Storage {
        message: "disk I/O error".into(),
    }
}

#[async_trait]
impl CustomerRepository for BrokenRepository {
    async fn get(&self, _id: CustomerId) -> Result<Customer, RepositoryError> {
        Err(broken())
    }
    async fn list(&self, _query: CustomerQuery) -> Result<Vec<Customer>, RepositoryError> {
        Err(broken())
    }
    async fn add(&self, _input: NewCustomer) -> Result<Customer, RepositoryError> {
        Err(broken())
    }
    async fn update(
        &self,
        _id: CustomerId,
        _patch: CustomerPatch,
    ) -> Result<Customer, RepositoryError> {
        Err(broken())
    }
    async fn set_status(
        &self,
        _id: CustomerId,
        _status: CustomerStatus,
    ) -> Result<Customer, RepositoryError> {
        Err(broken())
    }
    async fn stats(&self) -> Result<CustomerStats, RepositoryError> {
        Err(broken())
    }
}

#[tokio::test]
async fn storage_fault_is_internal_error() {
    let handler = McpHandler::new(Arc::new(BrokenRepository));
    let output = handler
        .dispatch(&call(30, "get_customer", json!({"customer_id": 1})))
        .await;
    assert_eq!(output.error_code(), Some(error_codes::INTERNAL_ERROR));

    // Protocol-level methods never touch the store.
    assert!(handler
        .dispatch(&rpc(methods::TOOLS_LIST, 31, None))
        .await
        .result()
        .is_some());
}
