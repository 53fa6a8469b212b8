pub mod kind_set;

#[doc(hidden)]
pub use stringify_ident::stringify_ident;

/// Invokes `$callback!` with `(kind, kind_with)` identifier pairs for every
/// kind the default classifier knows.
macro_rules! for_each_kind {
    ($callback: ident) => {
        $callback! {
            (arguments, arguments_with),
            (array, array_with),
            (boolean, boolean_with),
            (buffer, buffer_with),
            (date, date_with),
            (error, error_with),
            (float32array, float32array_with),
            (float64array, float64array_with),
            (function, function_with),
            (generator, generator_with),
            (generatorfunction, generatorfunction_with),
            (int16array, int16array_with),
            (int32array, int32array_with),
            (int8array, int8array_with),
            (map, map_with),
            (null, null_with),
            (number, number_with),
            (object, object_with),
            (promise, promise_with),
            (regexp, regexp_with),
            (set, set_with),
            (string, string_with),
            (symbol, symbol_with),
            (uint16array, uint16array_with),
            (uint32array, uint32array_with),
            (uint8array, uint8array_with),
            (uint8clampedarray, uint8clampedarray_with),
            (undefined, undefined_with),
            (weakmap, weakmap_with),
            (weakset, weakset_with)
        }
    };
}

pub(crate) use for_each_kind;
