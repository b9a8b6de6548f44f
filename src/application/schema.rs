//! Payload Schema - 请求体校验
//!
//! 把 JSON 请求体读取为强类型命令:
//! - 必填字段缺失、类型错误、长度越界都记为字段错误
//! - 一次读取收集全部错误，而不是遇到第一个就返回
//! - 未知字段忽略

use serde_json::{Map, Value};

use crate::domain::{check_text, FieldError, ValidationErrors, TEXT_MAX_LEN};

/// JSON 对象读取器
pub struct PayloadReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> PayloadReader<'a> {
    /// 请求体必须是 JSON 对象
    pub fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            None => Err(FieldError::body(
                "model_type",
                "Input should be a valid dictionary or object",
            )
            .into()),
        }
    }

    /// 必填文本字段，读取后交给 `parse` 构造值对象
    pub fn text<T, F>(&mut self, field: &str, parse: F) -> Option<T>
    where
        F: FnOnce(String) -> Result<T, FieldError>,
    {
        let object = self.object;
        match object.get(field) {
            None => self.reject(FieldError::missing(field)),
            Some(Value::String(s)) => self.capture(parse(s.clone())),
            Some(_) => self.reject(FieldError::string_type(field)),
        }
    }

    /// 更新时的非空文本字段：缺省表示不修改，`null` 不合法
    pub fn patch_text<T, F>(&mut self, field: &str, parse: F) -> Option<T>
    where
        F: FnOnce(String) -> Result<T, FieldError>,
    {
        let object = self.object;
        match object.get(field) {
            None => None,
            Some(Value::String(s)) => self.capture(parse(s.clone())),
            Some(_) => self.reject(FieldError::string_type(field)),
        }
    }

    /// 可空文本字段
    ///
    /// - 缺省 => `None`
    /// - `null` => `Some(None)`
    /// - 字符串 => `Some(Some(..))`
    pub fn nullable_text(&mut self, field: &str) -> Option<Option<String>> {
        let object = self.object;
        match object.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(s)) => self
                .capture(check_text(field, s, 0, TEXT_MAX_LEN))
                .map(|_| Some(s.clone())),
            Some(_) => self.reject(FieldError::string_type(field)),
        }
    }

    /// 必填整数字段
    pub fn integer(&mut self, field: &str) -> Option<i64> {
        let object = self.object;
        match object.get(field) {
            None => self.reject(FieldError::missing(field)),
            Some(value) => self.capture(coerce_int(field, value)),
        }
    }

    /// 更新时的非空整数字段
    pub fn patch_integer(&mut self, field: &str) -> Option<i64> {
        let object = self.object;
        object
            .get(field)
            .and_then(|value| self.capture(coerce_int(field, value)))
    }

    /// 结束读取；存在任何字段错误则返回全部错误
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn capture<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => self.reject(error),
        }
    }

    fn reject<T>(&mut self, error: FieldError) -> Option<T> {
        self.errors.push(error);
        None
    }
}

/// 宽松整数转换：接受整数、无小数部分的浮点数以及十进制字符串
fn coerce_int(field: &str, value: &Value) -> Result<i64, FieldError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() != 0.0 => Err(FieldError::new(
                    field,
                    "int_from_float",
                    "Input should be a valid integer, got a number with a fractional part",
                )),
                // i64::MAX as f64 会舍入为 2^63，上界必须是开区间
                Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
                _ => Err(FieldError::int_type(field)),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| FieldError::int_parsing(field)),
        _ => Err(FieldError::int_type(field)),
    }
}
