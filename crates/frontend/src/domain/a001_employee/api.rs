//! Employee endpoints of the records API.

use crate::shared::api_utils::{api_url, path_segment, read_json, ApiError, ApiResult};
use crate::shared::schema_api;
use contracts::domain::a001_employee::{
    CreateEmployeeResponse, Employee, EmployeeForm, MessageResponse, TABLE_NAME,
};
use gloo_net::http::Request;

fn employee_url(emp_no: i64) -> String {
    api_url(&format!("/api/employee/{}", path_segment(&emp_no.to_string())))
}

/// `GET /api/employees`
pub async fn fetch_employees() -> ApiResult<Vec<Employee>> {
    let sent = Request::get(&api_url("/api/employees")).send().await;
    read_json(sent, "Failed to fetch employees").await
}

/// `GET /api/employee/{emp_no}`
pub async fn fetch_employee(emp_no: i64) -> ApiResult<Employee> {
    let sent = Request::get(&employee_url(emp_no)).send().await;
    read_json(sent, "Could not fetch employee data").await
}

/// `POST /api/employees`
pub async fn create_employee(form: &EmployeeForm) -> ApiResult<CreateEmployeeResponse> {
    let sent = Request::post(&api_url("/api/employees"))
        .json(form)
        .map_err(ApiError::transport)?
        .send()
        .await;
    read_json(sent, "An unknown server error occurred.").await
}

/// `PUT /api/employee/{emp_no}`
///
/// The server answers with `{message}` or with the updated record; a record
/// reads as a reply without a message.
pub async fn update_employee(
    emp_no: i64,
    form: &EmployeeForm,
) -> ApiResult<Option<MessageResponse>> {
    let sent = Request::put(&employee_url(emp_no))
        .json(form)
        .map_err(ApiError::transport)?
        .send()
        .await;
    read_json(sent, "Failed to update employee.").await
}

/// `DELETE /api/employee/{emp_no}`
pub async fn delete_employee(emp_no: i64) -> ApiResult<Option<MessageResponse>> {
    let sent = Request::delete(&employee_url(emp_no)).send().await;
    read_json(sent, "Failed to delete employee.").await
}

/// `GET /api/tables/employees/columns`
pub async fn fetch_employee_columns() -> ApiResult<Vec<String>> {
    schema_api::fetch_columns(TABLE_NAME).await
}
