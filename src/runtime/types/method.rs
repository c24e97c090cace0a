use std::fmt::{Debug, Display, Error, Formatter};

use crate::runtime::{protocols::CloneableNativeMethod, RuntimeValue};

/// A bound method object: the reflection handle handed out by `Object#method`. The owner is the
/// class or module value whose method table the definition was found in; for singleton methods
/// that is the receiver's singleton class.
#[derive(Clone)]
pub struct Method {
    receiver: RuntimeValue,
    name: String,
    owner: RuntimeValue,
    fun: Box<dyn CloneableNativeMethod>,
}

impl Method {
    pub fn new(
        receiver: RuntimeValue,
        name: impl Into<String>,
        owner: RuntimeValue,
        fun: Box<dyn CloneableNativeMethod>,
    ) -> Self {
        Self {
            receiver,
            name: name.into(),
            owner,
            fun,
        }
    }

    pub fn receiver(&self) -> RuntimeValue {
        self.receiver.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> RuntimeValue {
        self.owner.clone()
    }

    pub fn fun(&self) -> Box<dyn CloneableNativeMethod> {
        self.fun.clone()
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "#<Method: {}#{}>", self.owner, self.name)
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self)
    }
}
