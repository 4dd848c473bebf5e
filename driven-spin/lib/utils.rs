//! Small helpers for writing output data.

/// Create a directory, along with any missing parents.
///
/// *Panics* if the directory couldn't be created.
#[macro_export]
macro_rules! mkdir {
    ( $path:expr ) => {
        std::fs::create_dir_all(&$path)
            .unwrap_or_else(|_| {
                panic!("couldn't create directory {:?}", $path)
            })
    }
}

/// Write a series of named arrays to a `.npz` archive.
///
/// Expected usage:
/// ```ignore
/// write_npz!(
///     path,
///     arrays: {
///         "name0" => &array0,
///         "name1" => &array1,
///         // ...
///     }
/// );
/// ```
///
/// *Panics* if the file couldn't be created or any array couldn't be written.
#[macro_export]
macro_rules! write_npz {
    ( $path:expr, arrays: { $( $name:expr => $arr:expr ),* $(,)? } ) => {
        {
            let mut npz
                = $crate::ndarray_npy::NpzWriter::new(
                    std::fs::File::create(&$path)
                        .unwrap_or_else(|_| {
                            panic!("couldn't create file {:?}", $path)
                        })
                );
            $(
                npz.add_array($name, $arr)
                    .expect("error writing array");
            )*
            npz.finish()
                .expect("error finalizing archive");
        }
    }
}
