/// Dimensional queries common to matrix types.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// size as a (rows, columns) tuple
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if the row and column dimensions agree
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
