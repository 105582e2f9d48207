use chrono::NaiveDate;
use fincore::{
    ac::traits::BearerSource,
    entity::{
        EditMode,
        Entity,
    },
    operation::Operation,
    operation_type::OperationType,
    report::{
        IncomeFilter,
        Report,
    },
    transport::ApiRequest,
};
use finclient::{
    ApiClient,
    EntityService,
    OperationService,
    OperationTypeService,
    ReportService,
    error::ErrorKind,
};
use http::{
    Method,
    StatusCode,
};
use serde_json::json;
use test_fin::{
    core::{
        MockApiTransport,
        json_response,
        text_response,
    },
    is_send_sync,
};

struct StaticToken(Option<&'static str>);

impl BearerSource for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn food() -> OperationType {
    OperationType {
        operation_type_id: 2,
        name: "Food".to_string(),
        description: None,
        is_income: false,
    }
}

#[async_std::test]
async fn list_operations() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.method == Method::GET
            && request.path == "api/operations"
            && request.bearer.is_none())
        .times(1)
        .returning(|_| Ok(json_response(200, json!([
            {"operationId": 10, "date": "2026-01-10", "amount": 10.5, "operationTypeId": 2},
            {"operationId": 11, "date": "2026-01-11", "amount": 3, "operationTypeId": 2},
        ]))));
    let service = OperationService::new(ApiClient::new(transport));
    is_send_sync(&service);
    let operations = service.list().await?;
    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].operation_id, 10);
    assert_eq!(operations[1].date, date(2026, 1, 11));
    Ok(())
}

#[async_std::test]
async fn list_null_is_empty() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(200, "null")));
    let service = OperationTypeService::new(ApiClient::new(transport));
    assert!(service.list().await?.is_empty());
    Ok(())
}

#[async_std::test]
async fn list_failure_is_wrapped() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(500, "boom")));
    let service = OperationTypeService::new(ApiClient::new(transport));
    let error = service.list().await.expect_err("status 500 must fail");
    assert_eq!(error.context, "Failed to load operation types");
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(matches!(
        error.kind,
        ErrorKind::Status { ref body, .. } if body == "boom",
    ));
}

#[async_std::test]
async fn bearer_is_attached() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.bearer.as_deref() == Some("ann-token"))
        .times(1)
        .returning(|_| Ok(json_response(200, json!([]))));
    let client = ApiClient::new(transport)
        .with_bearer(StaticToken(Some("ann-token")));
    OperationService::new(client).list().await?;
    Ok(())
}

#[async_std::test]
async fn empty_bearer_is_omitted() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.bearer.is_none())
        .times(2)
        .returning(|_| Ok(json_response(200, json!([]))));
    let client = ApiClient::new(transport);
    OperationService::new(client.clone().with_bearer(StaticToken(Some(""))))
        .list()
        .await?;
    OperationService::new(client.with_bearer(StaticToken(None)))
        .list()
        .await?;
    Ok(())
}

#[async_std::test]
async fn get_missing() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.path == "api/operationtypes/42")
        .times(1)
        .returning(|_| Ok(text_response(404, "")));
    let service = OperationTypeService::new(ApiClient::new(transport));
    assert_eq!(service.get(42).await?, None);
    Ok(())
}

#[async_std::test]
async fn get_found() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.path == "api/operationtypes/2")
        .times(1)
        .returning(|_| Ok(json_response(200, json!({
            "operationTypeId": 2, "name": "Food", "isIncome": false,
        }))));
    let service = OperationTypeService::new(ApiClient::new(transport));
    assert_eq!(service.get(2).await?, Some(food()));
    Ok(())
}

#[async_std::test]
async fn create_operation() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.method == Method::POST
            && request.path == "api/operations"
            && request.body.as_ref().map(|b| b["amount"] == json!(12.5)).unwrap_or(false))
        .times(1)
        .returning(|_| Ok(json_response(201, json!({
            "operationId": 99, "date": "2026-01-10", "amount": 12.5, "operationTypeId": 2,
        }))));
    let service = OperationService::new(ApiClient::new(transport));
    let created = service.create(&Operation {
        operation_id: 0,
        date: date(2026, 1, 10),
        amount: 12.5,
        note: None,
        operation_type_id: 2,
        operation_type: None,
    }).await?;
    assert_eq!(created.operation_id, 99);
    Ok(())
}

#[async_std::test]
async fn create_null_body() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(200, "null")));
    let service = OperationTypeService::new(ApiClient::new(transport));
    let error = service.create(&food()).await.expect_err("null body must fail");
    assert_eq!(error.context, "Failed to create operation type");
    assert!(matches!(error.kind, ErrorKind::Empty));
}

#[async_std::test]
async fn update_and_delete() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.method == Method::PUT && request.path == "api/operationtypes/2")
        .times(1)
        .returning(|_| Ok(text_response(204, "")));
    transport.expect_send()
        .withf(|request| request.method == Method::DELETE && request.path == "api/operationtypes/2")
        .times(1)
        .returning(|_| Ok(text_response(409, "in use")));
    let service = OperationTypeService::new(ApiClient::new(transport));
    service.update(2, &food()).await?;
    let error = service.delete(2).await.expect_err("conflict must fail");
    assert_eq!(error.context, "Failed to delete operation type 2");
    assert_eq!(error.status(), Some(StatusCode::CONFLICT));
    Ok(())
}

#[async_std::test]
async fn entity_dispatch() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.method == Method::POST && request.path == "api/operationtypes")
        .times(1)
        .returning(|_| Ok(json_response(201, json!({
            "operationTypeId": 8, "name": "Food", "isIncome": false,
        }))));
    transport.expect_send()
        .withf(|request| request.method == Method::PUT && request.path == "api/operations/5")
        .times(1)
        .returning(|_| Ok(text_response(204, "")));
    transport.expect_send()
        .withf(|request| request.method == Method::DELETE && request.path == "api/operations/5")
        .times(1)
        .returning(|_| Ok(text_response(204, "")));
    let service = EntityService::new(ApiClient::new(transport));

    let created = service.save(EditMode::Create, food().into()).await?;
    assert_eq!(created.id(), 8);
    assert!(matches!(created, Entity::OperationType(_)));

    let operation = Operation {
        operation_id: 5,
        date: date(2026, 1, 10),
        amount: 1.0,
        note: Some("bus".to_string()),
        operation_type_id: 2,
        operation_type: None,
    };
    let updated = service.save(EditMode::Update(5), operation.clone().into()).await?;
    assert_eq!(updated, Entity::Operation(operation));
    service.delete(&updated).await?;
    Ok(())
}

#[async_std::test]
async fn daily_report() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| *request == ApiRequest::get("api/dailyreport/report/daily")
            .query("Date", "2026-01-10"))
        .times(1)
        .returning(|_| Ok(json_response(200, json!({
            "date": "2026-01-10",
            "totalIncome": 100,
            "totalExpenses": 20,
            "operations": [
                {
                    "operationId": 1, "date": "2026-01-10", "amount": 100, "operationTypeId": 1,
                    "operationType": {"operationTypeId": 1, "name": "Salary", "isIncome": true},
                },
                {
                    "operationId": 2, "date": "2026-01-10", "amount": 20, "operationTypeId": 2,
                    "operationType": {"operationTypeId": 2, "name": "Food", "isIncome": false},
                },
            ],
        }))));
    let service = ReportService::new(ApiClient::new(transport));
    let report = service.daily(date(2026, 1, 10)).await?;
    assert_eq!(report.total_income, 100.0);
    assert_eq!(report.filter_operations(IncomeFilter::Income).len(), 1);
    assert_eq!(report.filter_operations(IncomeFilter::Expense)[0].operation_id, 2);
    Ok(())
}

#[async_std::test]
async fn period_report_failure() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.path == "api/periodreport/report/period"
            && request.query == [
                ("StartDate".to_string(), "2026-01-01".to_string()),
                ("EndDate".to_string(), "2026-01-31".to_string()),
            ])
        .times(1)
        .returning(|_| Ok(text_response(400, "End date must be after start date")));
    let service = ReportService::new(ApiClient::new(transport));
    let error = service.period(date(2026, 1, 1), date(2026, 1, 31))
        .await
        .expect_err("bad request must fail");
    assert_eq!(
        error.to_string(),
        "Failed to generate period report for 2026-01-01 to 2026-01-31: \
        unexpected status 400 Bad Request: End date must be after start date",
    );
}
