use serde::{Deserialize, Serialize};

/// 스칼라 또는 동일 길이 배열로 표현되는 물리량.
///
/// 계산 함수는 모든 입력을 원소 단위로 브로드캐스트한다. 스칼라는 배열 길이에
/// 맞춰 반복되고, 길이가 다른 배열끼리는 [`ShapeError`]로 거부한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Scalar(f64),
    Array(Vec<f64>),
}

/// 배열 길이가 서로 맞지 않을 때의 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    /// 먼저 만난 배열의 길이
    pub expected: usize,
    /// 길이가 다른 배열의 길이
    pub found: usize,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "배열 길이 불일치: 길이 {}인 배열과 길이 {}인 배열은 함께 계산할 수 없음",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ShapeError {}

impl Quantity {
    /// 배열이면 길이를, 스칼라이면 `None`을 반환한다.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Quantity::Scalar(_) => None,
            Quantity::Array(v) => Some(v.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Quantity::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Quantity::Scalar(v) => Some(*v),
            Quantity::Array(_) => None,
        }
    }

    /// i번째 원소. 스칼라는 어떤 인덱스에도 같은 값을 돌려준다.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Quantity::Scalar(v) => Some(*v),
            Quantity::Array(v) => v.get(index).copied(),
        }
    }

    /// 값들을 슬라이스로 본다. 스칼라는 길이 1 슬라이스가 된다.
    pub fn values(&self) -> &[f64] {
        match self {
            Quantity::Scalar(v) => std::slice::from_ref(v),
            Quantity::Array(v) => v,
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Quantity::Scalar(v) => vec![v],
            Quantity::Array(v) => v,
        }
    }

    /// 모든 원소에 `f`를 적용한다. 형태(스칼라/배열)는 유지된다.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Quantity {
        match self {
            Quantity::Scalar(v) => Quantity::Scalar(f(*v)),
            Quantity::Array(v) => Quantity::Array(v.iter().map(|x| f(*x)).collect()),
        }
    }

    /// N개의 입력을 원소 단위로 브로드캐스트하여 스칼라 커널 `f`를 적용한다.
    ///
    /// 입력이 모두 스칼라면 결과도 스칼라이고, 배열이 하나라도 있으면 그 길이의
    /// 배열을 반환한다. 배열끼리 길이가 다르면 [`ShapeError`].
    pub fn broadcast<const N: usize, F>(
        inputs: [&Quantity; N],
        f: F,
    ) -> Result<Quantity, ShapeError>
    where
        F: Fn([f64; N]) -> f64,
    {
        let mut len: Option<usize> = None;
        for q in inputs.iter() {
            if let Quantity::Array(v) = q {
                match len {
                    None => len = Some(v.len()),
                    Some(n) if n != v.len() => {
                        return Err(ShapeError {
                            expected: n,
                            found: v.len(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        match len {
            None => Ok(Quantity::Scalar(f(inputs.map(|q| q.at(0))))),
            Some(n) => Ok(Quantity::Array(
                (0..n).map(|i| f(inputs.map(|q| q.at(i)))).collect(),
            )),
        }
    }

    // 길이 검증이 끝난 뒤에만 호출한다.
    fn at(&self, index: usize) -> f64 {
        match self {
            Quantity::Scalar(v) => *v,
            Quantity::Array(v) => v[index],
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Scalar(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Quantity::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for Quantity {
    fn from(value: Vec<f64>) -> Self {
        Quantity::Array(value)
    }
}

impl From<&[f64]> for Quantity {
    fn from(value: &[f64]) -> Self {
        Quantity::Array(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Quantity {
    fn from(value: [f64; N]) -> Self {
        Quantity::Array(value.to_vec())
    }
}

impl From<&Quantity> for Quantity {
    fn from(value: &Quantity) -> Self {
        value.clone()
    }
}
