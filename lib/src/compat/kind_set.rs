use variadics_please::all_tuples;

/// One or more kind names accepted by a multi-kind check.
pub trait KindSet {
    fn kinds(&self) -> Vec<&str>;
}

impl<S: AsRef<str>> KindSet for [S] {
    fn kinds(&self) -> Vec<&str> {
        self.iter().map(|kind| kind.as_ref()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> KindSet for [S; N] {
    fn kinds(&self) -> Vec<&str> {
        self.as_slice().kinds()
    }
}

impl<S: AsRef<str>> KindSet for Vec<S> {
    fn kinds(&self) -> Vec<&str> {
        self.as_slice().kinds()
    }
}

impl<T: KindSet + ?Sized> KindSet for &T {
    fn kinds(&self) -> Vec<&str> {
        (**self).kinds()
    }
}

macro_rules! impl_kind_set {
    ($(($generic: ident, $var: ident)),*) => {
        impl<$($generic: AsRef<str>),*> KindSet for ($($generic,)*) {
            fn kinds(&self) -> Vec<&str> {
                let ($($var,)*) = self;
                vec![$($var.as_ref()),*]
            }
        }
    };
}

all_tuples!(impl_kind_set, 1, 16, K, k);
